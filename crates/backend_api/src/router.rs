use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{handlers, service::FinanceService};

/// Create the main application router with all API endpoints
pub fn create_router(service: Arc<dyn FinanceService>) -> Router {
    // Create CORS layer
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health_check))
        // Accounts
        .route("/api/accounts", post(handlers::create_account))
        .route("/api/accounts/:id", put(handlers::update_account))
        .route(
            "/api/accounts/:id/transactions",
            get(handlers::list_account_transactions),
        )
        // Transactions
        .route("/api/transactions", get(handlers::list_transactions))
        .route("/api/transactions/search", get(handlers::search_transactions))
        // Chat
        .route("/api/chat", post(handlers::send_chat_message))
        // Budgets, goals, alert rules
        .route("/api/budgets", post(handlers::create_budget))
        .route("/api/budgets/:id", put(handlers::update_budget))
        .route("/api/goals", post(handlers::create_savings_goal))
        .route("/api/goals/:id", put(handlers::update_savings_goal))
        .route("/api/alert-rules", post(handlers::create_alert_rule))
        .route("/api/alert-rules/:id", put(handlers::update_alert_rule))
        // Profile and manual assets
        .route("/api/profile", put(handlers::update_financial_profile))
        .route("/api/networth/assets", post(handlers::create_manual_asset))
        .route(
            "/api/networth/assets/:id",
            put(handlers::update_manual_asset),
        )
        .with_state(service)
        // Add middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
