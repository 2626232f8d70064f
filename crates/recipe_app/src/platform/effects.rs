use std::io;
use std::sync::{mpsc, Arc};
use std::thread;

use recipe_core::{Effect, Msg, RequestFailure};
use recipe_gateway::{GatewayError, GatewayEvent, GatewayHandle, RecipeGateway};
use recipe_logging::{recipe_debug, recipe_info};

use super::app::Inbound;

/// Hands core effects to the gateway and feeds its completions back as
/// messages.
pub struct EffectRunner {
    gateway: GatewayHandle,
}

impl EffectRunner {
    pub fn new(
        gateway: Arc<dyn RecipeGateway>,
        inbound_tx: mpsc::Sender<Inbound>,
    ) -> io::Result<Self> {
        let (event_tx, event_rx) = mpsc::channel();
        let gateway = GatewayHandle::spawn(gateway, event_tx)?;
        spawn_event_loop(event_rx, inbound_tx)?;
        Ok(Self { gateway })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SearchRecipes {
                    request_id,
                    term,
                    page,
                } => {
                    recipe_info!(
                        "search request_id={} term={:?} page={}",
                        request_id,
                        term,
                        page
                    );
                    self.gateway.search(request_id, term, page);
                }
                Effect::LoadFavourites { request_id } => {
                    recipe_info!("load favourites request_id={}", request_id);
                    self.gateway.list_favourites(request_id);
                }
                Effect::AddFavourite { request_id, recipe } => {
                    recipe_info!(
                        "add favourite request_id={} recipe={}",
                        request_id,
                        recipe.id
                    );
                    self.gateway.add_favourite(request_id, recipe);
                }
                Effect::RemoveFavourite {
                    request_id,
                    recipe_id,
                } => {
                    recipe_info!(
                        "remove favourite request_id={} recipe={}",
                        request_id,
                        recipe_id
                    );
                    self.gateway.remove_favourite(request_id, recipe_id);
                }
                Effect::FetchSummary {
                    request_id,
                    recipe_id,
                } => {
                    recipe_info!(
                        "fetch summary request_id={} recipe={}",
                        request_id,
                        recipe_id
                    );
                    self.gateway.recipe_summary(request_id, recipe_id);
                }
            }
        }
    }
}

fn spawn_event_loop(
    event_rx: mpsc::Receiver<GatewayEvent>,
    inbound_tx: mpsc::Sender<Inbound>,
) -> io::Result<()> {
    thread::Builder::new()
        .name("recipe-events".to_string())
        .spawn(move || {
            for event in event_rx {
                recipe_debug!("gateway completed request {}", event.request_id());
                if inbound_tx.send(Inbound::Msg(map_event(event))).is_err() {
                    break;
                }
            }
        })?;
    Ok(())
}

fn map_event(event: GatewayEvent) -> Msg {
    match event {
        GatewayEvent::SearchCompleted { request_id, result } => Msg::SearchLoaded {
            request_id,
            result: result.map_err(map_error),
        },
        GatewayEvent::FavouritesListed { request_id, result } => Msg::FavouritesLoaded {
            request_id,
            result: result.map_err(map_error),
        },
        GatewayEvent::FavouriteAdded {
            request_id,
            recipe_id,
            result,
        } => Msg::FavouriteAdded {
            request_id,
            recipe_id,
            result: result.map_err(map_error),
        },
        GatewayEvent::FavouriteRemoved {
            request_id,
            recipe_id,
            result,
        } => Msg::FavouriteRemoved {
            request_id,
            recipe_id,
            result: result.map_err(map_error),
        },
        GatewayEvent::SummaryFetched { request_id, result } => Msg::SummaryLoaded {
            request_id,
            result: result.map_err(map_error),
        },
    }
}

fn map_error(err: GatewayError) -> RequestFailure {
    RequestFailure::new(err.to_string())
}
