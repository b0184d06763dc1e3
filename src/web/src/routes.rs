use crate::TeamAppData;
use crate::chat::chat_routes;
use crate::health::health_routes;
use crate::history::history_routes;
use crate::teams::team_routes;
use axum::Router;

pub struct ServerRoutes;

impl ServerRoutes {
    pub fn create() -> Router<TeamAppData> {
        Router::<TeamAppData>::new()
            .merge(team_routes())
            .merge(chat_routes())
            .merge(history_routes())
            .merge(health_routes())
    }
}
