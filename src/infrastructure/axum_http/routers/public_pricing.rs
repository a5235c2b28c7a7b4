use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::get};
use tracing::error;

use crate::{
    application::usecases::public_pricing::PublicPricingUseCase,
    config::config_model::DotEnvyConfig,
    domain::{
        repositories::{payment_provider::PaymentProviderRepository, plans::PlanRepository},
        value_objects::plans::EnrichedPlanModel,
    },
    infrastructure::{
        axum_http::error_responses::AppError,
        payments::dodo_client::DodoClient,
        postgres::{postgres_connection::PgPoolSquad, repositories::plans::PlanPostgres},
    },
};

pub fn routes(db_pool: Arc<PgPoolSquad>, config: Arc<DotEnvyConfig>) -> Router {
    let plan_repository = PlanPostgres::new(Arc::clone(&db_pool));
    let dodo_client = DodoClient::new(&config.dodo);

    let usecase = PublicPricingUseCase::new(Arc::new(plan_repository), Arc::new(dodo_client));

    Router::new()
        .route(
            "/plans",
            get(get_public_pricing_plans::<PlanPostgres, DodoClient>),
        )
        .with_state(Arc::new(usecase))
}

pub async fn get_public_pricing_plans<P, D>(
    State(usecase): State<Arc<PublicPricingUseCase<P, D>>>,
) -> Result<Json<Vec<EnrichedPlanModel>>, AppError>
where
    P: PlanRepository + Send + Sync + 'static,
    D: PaymentProviderRepository + Send + Sync + 'static,
{
    let enriched_plans = usecase.get_public_pricing_plans().await.map_err(|err| {
        error!("public_pricing: failed to build plan list: {}", err);
        AppError::Internal(err)
    })?;

    Ok(Json(enriched_plans))
}
