use rorg_kernel::strings::{Localizer, ResourceBundle, StringProvider};
use std::sync::Arc;

fn provider() -> Arc<dyn StringProvider> {
    Arc::new(
        ResourceBundle::builder()
            .locale("en", [("status.running", "Running"), ("status.stopped", "Stopped")])
            .locale("uk", [("status.running", "Працює")])
            .fallback("en")
            .build()
            .expect("bundle"),
    )
}

#[test]
fn localizer_uses_its_own_locale() {
    let shared = provider();
    let en = Localizer::new(Arc::clone(&shared), "en");
    let uk = Localizer::new(shared, "uk");

    assert_eq!(en.get("status.running").as_deref(), Some("Running"));
    assert_eq!(uk.get("status.running").as_deref(), Some("Працює"));
    assert_eq!(uk.get("status.stopped").as_deref(), Some("Stopped"));
}

#[test]
fn missing_key_can_render_as_the_key() {
    let strings = Localizer::new(provider(), "uk");
    assert!(strings.get("status.paused").is_none());
    assert_eq!(strings.get_or_key("status.paused"), "status.paused");
}

#[test]
fn provider_is_shareable_across_threads() {
    let shared = provider();
    let handles: Vec<_> = ["en", "uk"]
        .into_iter()
        .map(|locale| {
            let provider = Arc::clone(&shared);
            std::thread::spawn(move || provider.get_string("status.running", locale).map(|s| s.into_owned()))
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().expect("thread")).collect();
    assert_eq!(results, vec![Some("Running".to_owned()), Some("Працює".to_owned())]);
}
