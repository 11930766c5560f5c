//! Asynchronous resource loading.
//!
//! The catalog CSV and the phone model list are fetched on background
//! threads, keeping the GUI responsive during network and file I/O. The two
//! loads are independent and may complete in either order.

use eframe::egui;
use rcatalog::{read_phone_models, CatalogReader, CsvCatalogReader, Dataset, DefaultFetcher, ResourceFetcher, ResourceLocation};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread;
use crate::io::LoadingState;

/// Result of a completed background load.
pub enum LoadResult {
    /// The catalog finished loading
    Catalog {
        /// Where the catalog was loaded from
        location: ResourceLocation,
        /// Parsed dataset, or a printable error
        result: Result<Dataset, String>,
    },
    /// The phone model list finished loading
    PhoneModels(Result<Vec<String>, String>),
    /// No load has completed since the last check
    None,
}

enum LoadMessage {
    Catalog {
        generation: u64,
        location: ResourceLocation,
        result: Result<Dataset, String>,
    },
    PhoneModels(Result<Vec<String>, String>),
}

/// Manages background loading of catalog resources.
///
/// Catalog loads carry a generation number. Starting a new catalog load (or
/// replacing the catalog in-process) bumps the generation, and results from
/// older loads are discarded when they arrive.
pub struct AsyncLoader {
    /// Shared loading state flags
    loading_state: Arc<Mutex<LoadingState>>,

    /// Fetcher shared with loader threads
    fetcher: Arc<dyn ResourceFetcher>,

    sender: Sender<LoadMessage>,
    receiver: Receiver<LoadMessage>,
}

impl AsyncLoader {
    /// Creates a loader that fetches from disk and over HTTP.
    pub fn new() -> Self {
        Self::with_fetcher(Arc::new(DefaultFetcher::new()))
    }

    /// Creates a loader using a specific fetcher.
    pub fn with_fetcher(fetcher: Arc<dyn ResourceFetcher>) -> Self {
        let (sender, receiver) = channel();
        Self {
            loading_state: Arc::new(Mutex::new(LoadingState::new())),
            fetcher,
            sender,
            receiver,
        }
    }

    /// Checks if a catalog load is currently in progress.
    pub fn is_loading(&self) -> bool {
        self.loading_state
            .lock()
            .map(|state| state.catalog_in_progress)
            .unwrap_or(false)
    }

    /// Invalidates any catalog load in flight and returns the new generation.
    ///
    /// Used when the catalog is replaced without a background load.
    pub fn supersede_catalog_load(&mut self) -> u64 {
        match self.loading_state.lock() {
            Ok(mut state) => {
                state.catalog_generation += 1;
                state.catalog_in_progress = false;
                state.catalog_generation
            }
            Err(_) => 0,
        }
    }

    /// Starts loading a catalog CSV in the background.
    ///
    /// Call `check_completion()` regularly (e.g., once per frame) to collect
    /// the result.
    ///
    /// # Arguments
    /// * `location` - Path or URL of the catalog
    /// * `ctx` - egui context for requesting a repaint when loading completes
    pub fn start_catalog_load(&mut self, location: ResourceLocation, ctx: &egui::Context) {
        let generation = {
            let mut state = match self.loading_state.lock() {
                Ok(state) => state,
                Err(poisoned) => poisoned.into_inner(),
            };
            state.catalog_generation += 1;
            state.catalog_in_progress = true;
            state.catalog_generation
        };

        log::info!("Loading catalog from {}", location);

        let loading_state = Arc::clone(&self.loading_state);
        let reader = CsvCatalogReader::new(Arc::clone(&self.fetcher));
        let sender = self.sender.clone();
        let ctx_handle = ctx.clone();

        thread::spawn(move || {
            let result = reader.read(&location).map_err(|e| format!("{:#}", e));

            if let Ok(mut state) = loading_state.lock() {
                if state.catalog_generation == generation {
                    state.catalog_in_progress = false;
                }
            }

            let _ = sender.send(LoadMessage::Catalog {
                generation,
                location,
                result,
            });

            // Notify GUI thread to repaint
            ctx_handle.request_repaint();
        });
    }

    /// Starts fetching the phone model list in the background.
    pub fn start_phone_models_load(&mut self, location: ResourceLocation, ctx: &egui::Context) {
        log::info!("Loading phone models from {}", location);

        let fetcher = Arc::clone(&self.fetcher);
        let sender = self.sender.clone();
        let ctx_handle = ctx.clone();

        thread::spawn(move || {
            let result = read_phone_models(fetcher.as_ref(), &location).map_err(|e| format!("{:#}", e));

            let _ = sender.send(LoadMessage::PhoneModels(result));
            ctx_handle.request_repaint();
        });
    }

    /// Returns the next completed load, if any.
    ///
    /// Results of superseded catalog loads are dropped here. Call repeatedly
    /// until it returns `LoadResult::None`.
    pub fn check_completion(&mut self) -> LoadResult {
        while let Ok(message) = self.receiver.try_recv() {
            match message {
                LoadMessage::Catalog { generation, location, result } => {
                    if generation != self.current_generation() {
                        log::debug!("Discarding stale catalog load from {}", location);
                        continue;
                    }
                    return LoadResult::Catalog { location, result };
                }
                LoadMessage::PhoneModels(result) => return LoadResult::PhoneModels(result),
            }
        }
        LoadResult::None
    }

    fn current_generation(&self) -> u64 {
        self.loading_state
            .lock()
            .map(|state| state.catalog_generation)
            .unwrap_or(0)
    }
}

impl Default for AsyncLoader {
    fn default() -> Self {
        Self::new()
    }
}
