//! # Category submission workflow
//!
//! Runs one submission of a validated [`ValidCategoryForm`]:
//!
//! 1. loading on
//! 2. reject images of [`api::MAX_IMAGE_BYTES`] or more, before any network call
//! 3. upload the image through an [`ImageHost`]
//! 4. build the [`api::NewCategory`] payload from the hosted URL
//! 5. create the category through a [`CategoryBackend`]
//! 6. one toast describing the outcome, loading off
//!
//! Every path ends with loading off, including the oversize and upload-failure
//! paths. On success the caller schedules navigation with [`schedule_redirect`]
//! after [`SubmitOutcome::redirect`].
//!
//! The UI side effects go through [`PageEffects`] so the sequence can run
//! outside a Dioxus runtime.

use std::time::Duration;

use api::{CategoryBackend, ImageHost};

use super::form::ValidCategoryForm;
use crate::time::sleep;
use crate::toast::Toast;

/// Delay between the success toast and leaving the page.
pub const REDIRECT_DELAY: Duration = Duration::from_millis(2000);

pub const OVERSIZE_MESSAGE: &str = "Image size must be less than 1MB";
pub const UPLOAD_FAILED_MESSAGE: &str = "Image upload failed";

/// UI side effects of a submission.
pub trait PageEffects {
    fn set_loading(&mut self, loading: bool);
    fn toast(&mut self, toast: Toast);
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    /// The backend accepted the category.
    Created { message: String },
    /// The backend answered without a success indicator.
    Rejected { message: String },
    ImageTooLarge { size: u64 },
    UploadFailed { error: String },
    /// The create call did not produce a readable answer.
    RequestFailed { error: String },
}

impl SubmitOutcome {
    /// How long to wait before navigating away, if at all.
    pub fn redirect(&self) -> Option<Duration> {
        match self {
            SubmitOutcome::Created { .. } => Some(REDIRECT_DELAY),
            _ => None,
        }
    }

    pub fn toast(&self) -> Toast {
        match self {
            SubmitOutcome::Created { message } => Toast::success(message.clone()),
            SubmitOutcome::Rejected { message } => Toast::error(message.clone()),
            SubmitOutcome::ImageTooLarge { .. } => Toast::error(OVERSIZE_MESSAGE),
            SubmitOutcome::UploadFailed { .. } => Toast::error(UPLOAD_FAILED_MESSAGE),
            SubmitOutcome::RequestFailed { error } => Toast::error(error.clone()),
        }
    }
}

/// Run one submission and report it through `effects`.
pub async fn submit<H, B, E>(
    host: &H,
    backend: &B,
    effects: &mut E,
    form: ValidCategoryForm,
) -> SubmitOutcome
where
    H: ImageHost,
    B: CategoryBackend,
    E: PageEffects,
{
    effects.set_loading(true);
    let outcome = run(host, backend, form).await;
    effects.toast(outcome.toast());
    effects.set_loading(false);
    outcome
}

async fn run<H, B>(host: &H, backend: &B, form: ValidCategoryForm) -> SubmitOutcome
where
    H: ImageHost,
    B: CategoryBackend,
{
    if form.image.exceeds_limit() {
        let size = form.image.size();
        tracing::warn!("Rejected {:?}: {} bytes exceeds limit", form.image, size);
        return SubmitOutcome::ImageTooLarge { size };
    }

    let uploaded = match host.upload(&form.image).await {
        Ok(uploaded) => uploaded,
        Err(e) => {
            tracing::error!("Image upload failed: {}", e);
            return SubmitOutcome::UploadFailed {
                error: e.to_string(),
            };
        }
    };

    let payload = form.into_payload(uploaded);
    tracing::info!("Creating category {:?}", payload.category_slug);
    match backend.create_category(&payload).await {
        Ok(res) if res.success => SubmitOutcome::Created {
            message: res.message,
        },
        Ok(res) => {
            tracing::warn!("Category rejected: {}", res.message);
            SubmitOutcome::Rejected {
                message: res.message,
            }
        }
        Err(e) => {
            tracing::error!("Category request failed: {}", e);
            SubmitOutcome::RequestFailed {
                error: e.to_string(),
            }
        }
    }
}

/// Wait `delay`, then navigate.
pub async fn schedule_redirect(delay: Duration, navigate: impl FnOnce()) {
    sleep(delay).await;
    navigate();
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{ApiError, ApiResponse, ImageFile, NewCategory, UploadedImage};
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[derive(Clone, Debug, PartialEq)]
    enum Call {
        Upload(String),
        Create(NewCategory),
    }

    type CallLog = Rc<RefCell<Vec<Call>>>;

    struct FakeHost {
        log: CallLog,
        result: Result<String, u16>,
    }

    impl ImageHost for FakeHost {
        async fn upload(&self, image: &ImageFile) -> Result<UploadedImage, ApiError> {
            self.log.borrow_mut().push(Call::Upload(image.file_name.clone()));
            match &self.result {
                Ok(url) => Ok(UploadedImage { url: url.clone() }),
                Err(status) => Err(ApiError::Upload {
                    status: *status,
                    body: "boom".to_string(),
                }),
            }
        }
    }

    struct FakeBackend {
        log: CallLog,
        response: Option<ApiResponse>,
    }

    impl CategoryBackend for FakeBackend {
        async fn create_category(&self, category: &NewCategory) -> Result<ApiResponse, ApiError> {
            self.log.borrow_mut().push(Call::Create(category.clone()));
            self.response
                .clone()
                .ok_or_else(|| ApiError::Server("502 Bad Gateway: ".to_string()))
        }
    }

    #[derive(Debug, PartialEq)]
    enum Effect {
        Loading(bool),
        Toast(Toast),
    }

    #[derive(Default)]
    struct Recorder {
        effects: Vec<Effect>,
    }

    impl PageEffects for Recorder {
        fn set_loading(&mut self, loading: bool) {
            self.effects.push(Effect::Loading(loading));
        }

        fn toast(&mut self, toast: Toast) {
            self.effects.push(Effect::Toast(toast));
        }
    }

    impl Recorder {
        fn loading(&self) -> bool {
            self.effects
                .iter()
                .rev()
                .find_map(|e| match e {
                    Effect::Loading(v) => Some(*v),
                    _ => None,
                })
                .unwrap_or(false)
        }

        fn toasts(&self) -> Vec<&Toast> {
            self.effects
                .iter()
                .filter_map(|e| match e {
                    Effect::Toast(t) => Some(t),
                    _ => None,
                })
                .collect()
        }
    }

    fn fakes(
        upload: Result<&str, u16>,
        response: Option<ApiResponse>,
    ) -> (FakeHost, FakeBackend, CallLog) {
        let log = CallLog::default();
        let host = FakeHost {
            log: log.clone(),
            result: upload.map(str::to_string),
        };
        let backend = FakeBackend {
            log: log.clone(),
            response,
        };
        (host, backend, log)
    }

    fn form_with_image_size(size: usize) -> ValidCategoryForm {
        ValidCategoryForm {
            name: "Shoes".to_string(),
            slug: "shoes".to_string(),
            description: "All footwear".to_string(),
            image: ImageFile::new("shoes.png", Some("image/png".to_string()), vec![7; size]),
        }
    }

    const URL: &str = "https://res.example.com/shoes.png";

    #[tokio::test]
    async fn test_upload_happens_before_create_with_uploaded_url() {
        let (host, backend, log) = fakes(Ok(URL), Some(ApiResponse::ok("Category added")));
        let mut effects = Recorder::default();

        submit(&host, &backend, &mut effects, form_with_image_size(1024)).await;

        let calls = log.borrow();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], Call::Upload("shoes.png".to_string()));
        match &calls[1] {
            Call::Create(payload) => {
                assert_eq!(payload.category_image, URL);
                assert_eq!(payload.category_name, "Shoes");
                assert_eq!(payload.category_slug, "shoes");
                assert_eq!(payload.category_description, "All footwear");
            }
            other => panic!("expected create, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_success_toasts_and_requests_redirect() {
        let (host, backend, _log) = fakes(Ok(URL), Some(ApiResponse::ok("Category added")));
        let mut effects = Recorder::default();

        let outcome = submit(&host, &backend, &mut effects, form_with_image_size(10)).await;

        assert_eq!(
            outcome,
            SubmitOutcome::Created {
                message: "Category added".to_string()
            }
        );
        assert_eq!(outcome.redirect(), Some(Duration::from_millis(2000)));
        assert_eq!(
            effects.effects,
            vec![
                Effect::Loading(true),
                Effect::Toast(Toast::success("Category added")),
                Effect::Loading(false),
            ]
        );
    }

    #[tokio::test]
    async fn test_rejection_toasts_server_message_and_resets_loading() {
        let (host, backend, _log) = fakes(Ok(URL), Some(ApiResponse::failed("Slug already exists")));
        let mut effects = Recorder::default();

        let outcome = submit(&host, &backend, &mut effects, form_with_image_size(10)).await;

        assert_eq!(outcome.redirect(), None);
        assert_eq!(effects.toasts(), vec![&Toast::error("Slug already exists")]);
        assert!(!effects.loading());
    }

    #[tokio::test]
    async fn test_oversized_image_aborts_before_network() {
        let (host, backend, log) = fakes(Ok(URL), Some(ApiResponse::ok("unused")));
        let mut effects = Recorder::default();

        let outcome = submit(&host, &backend, &mut effects, form_with_image_size(1_048_576)).await;

        assert_eq!(outcome, SubmitOutcome::ImageTooLarge { size: 1_048_576 });
        assert!(log.borrow().is_empty());
        assert_eq!(
            effects.toasts(),
            vec![&Toast::error("Image size must be less than 1MB")]
        );
        assert!(!effects.loading());
    }

    #[tokio::test]
    async fn test_image_just_under_limit_is_uploaded() {
        let (host, backend, log) = fakes(Ok(URL), Some(ApiResponse::ok("ok")));
        let mut effects = Recorder::default();

        submit(&host, &backend, &mut effects, form_with_image_size(1_048_575)).await;

        assert_eq!(log.borrow().len(), 2);
    }

    #[tokio::test]
    async fn test_upload_failure_skips_create_and_resets_loading() {
        let (host, backend, log) = fakes(Err(500), Some(ApiResponse::ok("unused")));
        let mut effects = Recorder::default();

        let outcome = submit(&host, &backend, &mut effects, form_with_image_size(10)).await;

        assert!(matches!(outcome, SubmitOutcome::UploadFailed { .. }));
        assert_eq!(*log.borrow(), vec![Call::Upload("shoes.png".to_string())]);
        assert_eq!(effects.toasts(), vec![&Toast::error("Image upload failed")]);
        assert!(!effects.loading());
    }

    #[tokio::test]
    async fn test_request_failure_is_toasted() {
        let (host, backend, _log) = fakes(Ok(URL), None);
        let mut effects = Recorder::default();

        let outcome = submit(&host, &backend, &mut effects, form_with_image_size(10)).await;

        assert!(matches!(outcome, SubmitOutcome::RequestFailed { .. }));
        let toasts = effects.toasts();
        assert_eq!(toasts.len(), 1);
        assert!(toasts[0].message.contains("502 Bad Gateway"));
        assert!(!effects.loading());
    }

    #[tokio::test]
    async fn test_every_exit_path_turns_loading_off() {
        let cases = [
            (Ok(URL), Some(ApiResponse::ok("ok")), 10),
            (Ok(URL), Some(ApiResponse::failed("no")), 10),
            (Ok(URL), None, 10),
            (Err(400), None, 10),
            (Ok(URL), None, 5 * 1024 * 1024),
        ];
        for (upload, response, size) in cases {
            let (host, backend, _log) = fakes(upload, response);
            let mut effects = Recorder::default();
            submit(&host, &backend, &mut effects, form_with_image_size(size)).await;
            assert_eq!(effects.effects.first(), Some(&Effect::Loading(true)));
            assert_eq!(effects.effects.last(), Some(&Effect::Loading(false)));
        }
    }

    #[tokio::test]
    async fn test_repeated_submissions_are_independent() {
        let (host, backend, log) = fakes(Ok(URL), Some(ApiResponse::ok("ok")));
        let mut effects = Recorder::default();

        submit(&host, &backend, &mut effects, form_with_image_size(10)).await;
        submit(&host, &backend, &mut effects, form_with_image_size(10)).await;

        let calls = log.borrow();
        assert_eq!(calls.len(), 4);
        assert!(matches!(calls[0], Call::Upload(_)));
        assert!(matches!(calls[1], Call::Create(_)));
        assert!(matches!(calls[2], Call::Upload(_)));
        assert!(matches!(calls[3], Call::Create(_)));
        assert_eq!(effects.toasts().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_redirect_waits_exactly_two_seconds() {
        let start = tokio::time::Instant::now();
        let mut navigated_at = None;

        schedule_redirect(REDIRECT_DELAY, || navigated_at = Some(tokio::time::Instant::now())).await;

        let elapsed = navigated_at.map(|at| at - start);
        assert_eq!(elapsed, Some(Duration::from_millis(2000)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_redirect_not_before_delay() {
        let navigated = Arc::new(AtomicBool::new(false));
        let flag = navigated.clone();
        let task = tokio::spawn(schedule_redirect(REDIRECT_DELAY, move || {
            flag.store(true, Ordering::SeqCst)
        }));

        // Let the task register its timer
        tokio::task::yield_now().await;

        tokio::time::advance(Duration::from_millis(1999)).await;
        tokio::task::yield_now().await;
        assert!(!navigated.load(Ordering::SeqCst));

        tokio::time::advance(Duration::from_millis(1)).await;
        task.await.unwrap();
        assert!(navigated.load(Ordering::SeqCst));
    }
}
