//! vetcalc MCP Server Implementation
//!
//! Implements the MCP server with all calculator tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::Deserialize;
use tokio::sync::Mutex;

use crate::tools::energy;
use crate::tools::risk;
use crate::tools::status::StatusTracker;

/// vetcalc MCP Service
#[derive(Clone)]
pub struct VetcalcService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    tool_router: ToolRouter<VetcalcService>,
}

impl VetcalcService {
    pub fn new() -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new())),
            tool_router: Self::tool_router(),
        }
    }
}

impl Default for VetcalcService {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AssessAnesthesiaRiskParams {
    /// ASA physical status class, 1-5. Invalid or missing values use class 1.
    pub asa: Option<String>,
    /// Checked risk factor ids (see list_risk_factors for valid ids)
    #[serde(default)]
    pub factors: Vec<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CalculateEnergyParams {
    /// Patient species: "cat" or "dog" (anything else is treated as dog)
    pub species: Option<String>,
    /// Body weight in kilograms (must be positive)
    pub weight_kg: Option<String>,
    /// Feeding plan key (see list_nutrition_plans; unknown keys fall back to maintenance_neutered)
    pub plan: Option<String>,
    /// Caloric density of the food in kcal per cup (optional; enables cups/day)
    pub kcal_per_cup: Option<String>,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl VetcalcService {
    // --- Status ---

    #[tool(description = "Get the current status of the vetcalc service including build info and process information")]
    async fn vetcalc_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        let status = tracker.get_status();
        let json = serde_json::to_string_pretty(&status)
            .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Get step-by-step instructions for the veterinary calculators. Call this when starting a session or when unsure how to use the calculator tools.")]
    fn calculator_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::CALCULATOR_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(CALCULATOR_INSTRUCTIONS)]))
    }

    // --- Anesthesia Risk ---

    #[tool(description = "Score the anesthesia risk checklist: ASA class plus checked risk factors, returning the total score, Low/Moderate/High tier, monitoring checklist, and rendered output panel")]
    fn assess_anesthesia_risk(&self, Parameters(p): Parameters<AssessAnesthesiaRiskParams>) -> Result<CallToolResult, McpError> {
        let result = risk::assess(p.asa.as_deref(), &p.factors);
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "List the anesthesia risk checklist: factor ids with labels and weights, the valid ASA range, and the tier thresholds")]
    fn list_risk_factors(&self) -> Result<CallToolResult, McpError> {
        let result = risk::list_risk_factors();
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    // --- Energy ---

    #[tool(description = "Calculate RER and MER (kcal/day) from species, body weight, and feeding plan, with optional cups/day from the food's caloric density. An invalid body weight returns an input-error report, not a protocol error.")]
    fn calculate_energy(&self, Parameters(p): Parameters<CalculateEnergyParams>) -> Result<CallToolResult, McpError> {
        let result = energy::calculate(
            p.species.as_deref(),
            p.weight_kg.as_deref(),
            p.plan.as_deref(),
            p.kcal_per_cup.as_deref(),
        );
        let json = match result {
            Ok(report) => serde_json::to_string_pretty(&report),
            Err(input_error) => serde_json::to_string_pretty(&input_error),
        }.map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "List the feeding plans with their display names and the MER factor applied per species")]
    fn list_nutrition_plans(&self) -> Result<CallToolResult, McpError> {
        let result = energy::list_nutrition_plans();
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for VetcalcService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "vetcalc".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Veterinary Calculators".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Veterinary Calculators (vetcalc) - anesthesia risk scoring and RER/MER energy calculation. \
                 IMPORTANT: Call calculator_instructions when starting a session. \
                 Risk: assess_anesthesia_risk, list_risk_factors. \
                 Energy: calculate_energy, list_nutrition_plans. \
                 Every call recomputes from the submitted values; nothing is stored between calls. \
                 An invalid body weight returns an input-error report with the message to relay to the user."
                    .into(),
            ),
        }
    }
}
