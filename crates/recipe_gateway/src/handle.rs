use std::io;
use std::sync::{mpsc, Arc};
use std::thread;

use recipe_core::{Recipe, RecipeId, RequestId};
use recipe_logging::{recipe_debug, recipe_info};

use crate::{GatewayEvent, RecipeGateway};

enum GatewayCommand {
    Search {
        request_id: RequestId,
        term: String,
        page: u32,
    },
    ListFavourites {
        request_id: RequestId,
    },
    AddFavourite {
        request_id: RequestId,
        recipe: Recipe,
    },
    RemoveFavourite {
        request_id: RequestId,
        recipe_id: RecipeId,
    },
    RecipeSummary {
        request_id: RequestId,
        recipe_id: RecipeId,
    },
}

/// Runs gateway calls on a background tokio runtime.
///
/// Requests are fire-and-forget; each one produces exactly one
/// [`GatewayEvent`] on the channel given to [`GatewayHandle::spawn`]. Calls run
/// concurrently, so events arrive in completion order, not submission order.
#[derive(Clone)]
pub struct GatewayHandle {
    cmd_tx: mpsc::Sender<GatewayCommand>,
}

impl GatewayHandle {
    pub fn spawn(
        gateway: Arc<dyn RecipeGateway>,
        event_tx: mpsc::Sender<GatewayEvent>,
    ) -> io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("recipe-gateway-worker")
            .enable_all()
            .build()?;

        thread::Builder::new()
            .name("recipe-gateway".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let gateway = gateway.clone();
                    let event_tx = event_tx.clone();
                    runtime.spawn(async move {
                        let event = execute(gateway.as_ref(), command).await;
                        let _ = event_tx.send(event);
                    });
                }
                recipe_info!("gateway command channel closed; shutting down");
            })?;

        Ok(Self { cmd_tx })
    }

    pub fn search(&self, request_id: RequestId, term: impl Into<String>, page: u32) {
        self.submit(GatewayCommand::Search {
            request_id,
            term: term.into(),
            page,
        });
    }

    pub fn list_favourites(&self, request_id: RequestId) {
        self.submit(GatewayCommand::ListFavourites { request_id });
    }

    pub fn add_favourite(&self, request_id: RequestId, recipe: Recipe) {
        self.submit(GatewayCommand::AddFavourite { request_id, recipe });
    }

    pub fn remove_favourite(&self, request_id: RequestId, recipe_id: RecipeId) {
        self.submit(GatewayCommand::RemoveFavourite {
            request_id,
            recipe_id,
        });
    }

    pub fn recipe_summary(&self, request_id: RequestId, recipe_id: RecipeId) {
        self.submit(GatewayCommand::RecipeSummary {
            request_id,
            recipe_id,
        });
    }

    fn submit(&self, command: GatewayCommand) {
        if self.cmd_tx.send(command).is_err() {
            recipe_debug!("gateway worker gone; request dropped");
        }
    }
}

async fn execute(gateway: &dyn RecipeGateway, command: GatewayCommand) -> GatewayEvent {
    match command {
        GatewayCommand::Search {
            request_id,
            term,
            page,
        } => GatewayEvent::SearchCompleted {
            request_id,
            result: gateway.search(&term, page).await,
        },
        GatewayCommand::ListFavourites { request_id } => GatewayEvent::FavouritesListed {
            request_id,
            result: gateway.list_favourites().await,
        },
        GatewayCommand::AddFavourite { request_id, recipe } => GatewayEvent::FavouriteAdded {
            request_id,
            result: gateway.add_favourite(&recipe).await,
            recipe_id: recipe.id,
        },
        GatewayCommand::RemoveFavourite {
            request_id,
            recipe_id,
        } => GatewayEvent::FavouriteRemoved {
            request_id,
            result: gateway.remove_favourite(&recipe_id).await,
            recipe_id,
        },
        GatewayCommand::RecipeSummary {
            request_id,
            recipe_id,
        } => GatewayEvent::SummaryFetched {
            request_id,
            result: gateway.recipe_summary(&recipe_id).await,
        },
    }
}
