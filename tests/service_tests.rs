// tests/service_tests.rs
// Addiction data service: validation, backend calls and notifications

mod common;

use common::{FakeBackend, RecordingNotifier};
use recovery_site::web_app::error::ApiError;
use recovery_site::web_app::model::Category;
use recovery_site::web_app::notify::{NotificationPolicy, SilentNotifier};
use recovery_site::web_app::service::AddictionService;

fn service() -> (AddictionService<FakeBackend, RecordingNotifier>, RecordingNotifier) {
    let notifier = RecordingNotifier::default();
    (AddictionService::new(FakeBackend::new(), notifier.clone()), notifier)
}

#[tokio::test]
async fn test_list_types_returns_categories() {
    let (service, notifier) = service();

    let types = service.list_types().await.unwrap();
    assert_eq!(types.get(Category::Substance).len(), 2);
    assert_eq!(types.get(Category::Emotional)[0].name, "Overthinking");
    assert_eq!(service.backend().calls(), 1);
    assert!(notifier.notices().is_empty());
}

#[tokio::test]
async fn test_blank_id_rejected_before_backend_call() {
    let (service, _) = service();

    for id in ["", "   "] {
        let err = service.get_addiction(id).await.unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)), "got {:?}", err);
    }
    assert_eq!(service.backend().calls(), 0);
}

#[tokio::test]
async fn test_blank_query_rejected_before_backend_call() {
    let (service, notifier) = service();

    let err = service.search("").await.unwrap_err();
    assert_eq!(err.user_message(), "Search query is required");
    assert_eq!(service.backend().calls(), 0);

    // Validation failures carry no status, so they are reported
    assert_eq!(notifier.notices().len(), 1);
}

#[tokio::test]
async fn test_get_addiction_trims_identifier() {
    let (service, _) = service();

    let addiction = service.get_addiction(" gambling ").await.unwrap();
    assert_eq!(addiction.category, Category::Behavioral);
    assert_eq!(service.backend().requested(), vec!["gambling".to_string()]);
}

#[tokio::test]
async fn test_search_matches_names() {
    let (service, _) = service();

    let found = service.search("GAM").await.unwrap();
    let names: Vec<_> = found.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Gambling"]);
}

#[tokio::test]
async fn test_not_found_is_not_notified() {
    let (service, notifier) = service();

    let err = service.get_addiction("unknown").await.unwrap_err();
    assert!(err.is_not_found());
    assert!(notifier.notices().is_empty());
}

#[tokio::test]
async fn test_server_error_is_notified_with_message() {
    let notifier = RecordingNotifier::default();
    let backend = FakeBackend::failing(ApiError::server(500, None));
    let service = AddictionService::new(backend, notifier.clone());

    assert!(service.list_types().await.is_err());

    let notices = notifier.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].message, "Server Error: 500");
}

#[tokio::test]
async fn test_network_error_is_notified() {
    let notifier = RecordingNotifier::default();
    let service = AddictionService::new(FakeBackend::failing(ApiError::network()), notifier.clone());

    let err = service.list_types().await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
    assert_eq!(
        notifier.notices()[0].message,
        "Network error. Please check your connection."
    );
}

#[tokio::test]
async fn test_custom_policy_silences_listed_statuses() {
    let notifier = RecordingNotifier::default();
    let service = AddictionService::with_policy(
        FakeBackend::failing(ApiError::server(503, Some("Maintenance".into()))),
        notifier.clone(),
        NotificationPolicy::new(vec![404, 503]),
    );

    assert!(service.list_types().await.is_err());
    assert!(notifier.notices().is_empty());
    assert_eq!(service.policy().silent_statuses(), &[404, 503]);
}

#[tokio::test]
async fn test_silent_notifier_still_returns_errors() {
    let service = AddictionService::new(FakeBackend::failing(ApiError::server(500, None)), SilentNotifier);

    let err = service.list_types().await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert_eq!(service.backend().calls(), 1);
}
