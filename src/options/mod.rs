//! Remote option source.
//!
//! The option source fetches an ordered list of option strings once, when
//! the host initializes it, and publishes the list together with a loading
//! flag. The default endpoint is the REST Countries API, projected to each
//! country's common name.
//!
//! Fetch and decode failures are logged through `tracing` and otherwise
//! swallowed: the source keeps its previous list (initially empty) and
//! clears the loading flag.
//!
//! The fetch is tied to the source's lifetime. Dropping the source (or
//! calling [`Model::cancel`]) raises a cancellation flag that the in-flight
//! command checks before publishing, so a result never lands after the
//! owning widget is gone.
//!
//! # Example
//!
//! ```rust
//! use bubbletea_dropdown::options;
//! use std::time::Duration;
//!
//! let mut source = options::new()
//!     .with_endpoint("https://restcountries.com/v3.1/all?fields=name")
//!     .with_timeout(Duration::from_secs(10));
//! let _cmd = source.load();
//! assert!(source.loading());
//! assert!(source.options().is_empty());
//! ```

mod error;
mod fetch;

pub use error::FetchError;
pub use fetch::parse_common_names;

use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
use lipgloss_extras::prelude::*;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Country names from the REST Countries API.
pub const DEFAULT_ENDPOINT: &str = "https://restcountries.com/v3.1/all?fields=name";

static LAST_ID: AtomicUsize = AtomicUsize::new(1);

fn next_id() -> usize {
    LAST_ID.fetch_add(1, Ordering::Relaxed)
}

/// Delivered when a fetch started by [`Model::load`] finishes.
#[derive(Debug)]
pub struct OptionsLoadedMsg {
    /// Identifier of the source that issued the fetch.
    pub id: usize,
    /// The decoded names, or why they could not be obtained.
    pub result: Result<Vec<String>, FetchError>,
}

/// Loads and holds the option list.
#[derive(Debug)]
pub struct Model {
    /// Style of the loading line.
    pub loading_style: Style,
    /// Text of the loading line.
    pub loading_text: String,

    endpoint: String,
    timeout: Option<Duration>,
    client: reqwest::Client,
    options: Vec<String>,
    loading: bool,
    revision: usize,
    id: usize,
    cancelled: Arc<AtomicBool>,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            loading_style: Style::new().foreground(AdaptiveColor {
                Light: "#8E8E8E",
                Dark: "#747373",
            }),
            loading_text: "Loading options…".to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: None,
            client: reqwest::Client::new(),
            options: Vec::new(),
            loading: false,
            revision: 0,
            id: next_id(),
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }
}

impl Model {
    /// Creates a source for the default endpoint.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the URL to fetch.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Bounds the request duration. No timeout is applied by default.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Uses a caller-provided HTTP client.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// The configured endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Identifier matched against [`OptionsLoadedMsg::id`].
    pub fn id(&self) -> usize {
        self.id
    }

    /// The current option list, in response order.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Whether a fetch is in flight.
    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Incremented each time a new list is published. Hosts compare it to
    /// decide when to hand the list to the dropdown.
    pub fn revision(&self) -> usize {
        self.revision
    }

    /// Stops any in-flight fetch from publishing.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    /// Whether [`cancel`](Self::cancel) was called.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// Starts the fetch and sets the loading flag.
    ///
    /// The returned command resolves to an [`OptionsLoadedMsg`], or to no
    /// message at all if the source was cancelled meanwhile.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_dropdown::prelude::*;
    ///
    /// let mut source = options_new().with_endpoint("http://127.0.0.1:9/countries");
    /// let cmd = source.load();
    /// assert!(source.loading());
    ///
    /// // Hand `cmd` to the runtime; its message goes back through `update`.
    /// drop(cmd);
    /// ```
    pub fn load(&mut self) -> Cmd {
        self.loading = true;

        let id = self.id;
        let client = self.client.clone();
        let endpoint = self.endpoint.clone();
        let timeout = self.timeout;
        let cancelled = Arc::clone(&self.cancelled);

        tracing::debug!(%endpoint, "fetching options");
        Box::pin(async move {
            let result = fetch::fetch_common_names(&client, &endpoint, timeout).await;
            if cancelled.load(Ordering::Acquire) {
                tracing::debug!(%endpoint, "option source gone, dropping fetch result");
                return None;
            }
            Some(Box::new(OptionsLoadedMsg { id, result }) as Msg)
        })
    }

    /// Applies fetch results addressed to this source. Other messages are
    /// ignored.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        let Ok(loaded) = msg.downcast::<OptionsLoadedMsg>() else {
            return None;
        };
        if loaded.id != self.id || self.is_cancelled() {
            return None;
        }

        match loaded.result {
            Ok(options) => {
                tracing::debug!(count = options.len(), "options loaded");
                self.options = options;
                self.revision += 1;
            }
            Err(err) => {
                tracing::error!(endpoint = %self.endpoint, error = %err, "error fetching options");
            }
        }
        self.loading = false;
        None
    }

    /// Renders the loading line, or nothing once loading is over.
    pub fn view(&self) -> String {
        if !self.loading {
            return String::new();
        }
        self.loading_style.clone().render(&self.loading_text)
    }
}

impl Drop for Model {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        let mut model = Self::new();
        let cmd = model.load();
        (model, Some(cmd))
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}

/// Creates a source for the default endpoint. Equivalent to `Model::new()`.
pub fn new() -> Model {
    Model::new()
}
