pub mod generate;

use crate::TeamAppData;
use axum::Router;

pub fn team_routes() -> Router<TeamAppData> {
    Router::new().merge(generate::routes::routes())
}
