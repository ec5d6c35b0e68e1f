use crate::error::ClientError;
use crate::prediction::PredictionResult;
use derive_more::Display;
use strum_macros::Display as StrumDisplay;
use uuid::Uuid;

/// Lowercase names double as CSS modifier classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay)]
#[strum(serialize_all = "lowercase")]
pub enum RequestStatus {
    Idle,
    Loading,
    Error,
    Succeeded,
}

/// Ticket identifying one submission. Completions carrying an outdated
/// ticket are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{}", _0)]
pub struct RequestId(Uuid);

impl RequestId {
    fn new() -> Self {
        RequestId(Uuid::new_v4())
    }
}

/// State of the single-image upload view.
///
/// `F` is the selected file handle and `P` the local preview handle. The
/// preview is owned here so replacing or clearing it drops (and thereby
/// releases) the previous one.
#[derive(Debug)]
pub struct UploadSession<F, P> {
    file: Option<F>,
    preview: Option<P>,
    status: RequestStatus,
    result: Option<PredictionResult>,
    error: Option<ClientError>,
    pending: Option<RequestId>,
}

impl<F, P> Default for UploadSession<F, P> {
    fn default() -> Self {
        Self {
            file: None,
            preview: None,
            status: RequestStatus::Idle,
            result: None,
            error: None,
            pending: None,
        }
    }
}

impl<F: Clone, P> UploadSession<F, P> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(&self) -> Option<&F> {
        self.file.as_ref()
    }

    pub fn preview(&self) -> Option<&P> {
        self.preview.as_ref()
    }

    pub fn status(&self) -> RequestStatus {
        self.status
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&ClientError> {
        self.error.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.status == RequestStatus::Loading
    }

    /// Stores a newly chosen file. `None` leaves the session untouched and
    /// returns false.
    ///
    /// The preview is only built once a file is known to be present. Any
    /// prior result, error or in-flight ticket is discarded.
    pub fn select_file(&mut self, file: Option<F>, make_preview: impl FnOnce(&F) -> P) -> bool {
        let Some(file) = file else {
            return false;
        };

        if self.preview.take().is_some() {
            log::debug!("released previous preview");
        }
        self.preview = Some(make_preview(&file));
        self.file = Some(file);
        self.result = None;
        self.error = None;
        self.abandon_pending();
        self.status = RequestStatus::Idle;
        true
    }

    /// Starts a submission. Without a file this records and returns
    /// [`ClientError::NoFileSelected`]; the caller must not touch the network.
    ///
    /// A submission started while another is loading supersedes it.
    pub fn begin_submit(&mut self) -> Result<(RequestId, F), ClientError> {
        let Some(file) = self.file.clone() else {
            self.status = RequestStatus::Error;
            self.error = Some(ClientError::NoFileSelected);
            return Err(ClientError::NoFileSelected);
        };

        self.abandon_pending();
        let id = RequestId::new();
        self.pending = Some(id);
        self.status = RequestStatus::Loading;
        self.error = None;
        self.result = None;
        Ok((id, file))
    }

    /// Applies the outcome of a submission. Returns false when `id` is no
    /// longer the awaited ticket, in which case nothing changes.
    pub fn complete(&mut self, id: RequestId, outcome: Result<PredictionResult, ClientError>) -> bool {
        if self.pending != Some(id) {
            log::debug!("dropping stale response for request {}", id);
            return false;
        }

        self.pending = None;
        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.error = None;
                self.status = RequestStatus::Succeeded;
            }
            Err(err) => {
                self.result = None;
                self.error = Some(err);
                self.status = RequestStatus::Error;
            }
        }
        true
    }

    /// Clears file, preview, result and error together.
    pub fn reset(&mut self) {
        self.abandon_pending();
        self.file = None;
        self.preview = None;
        self.result = None;
        self.error = None;
        self.status = RequestStatus::Idle;
    }

    fn abandon_pending(&mut self) {
        if let Some(id) = self.pending.take() {
            log::info!("abandoning in-flight request {}", id);
        }
    }
}
