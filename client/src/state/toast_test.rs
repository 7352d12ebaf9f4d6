use super::*;

#[test]
fn config_defaults_to_five_seconds() {
    let config = ToastConfig::new("hola");
    assert_eq!(config.delay_ms, DEFAULT_DELAY_MS);
    assert_eq!(config.variant, ToastVariant::Default);
    assert_eq!(config.title, None);
}

#[test]
fn builder_sets_every_field() {
    let config = ToastConfig::new("No se pudieron cargar los comentarios")
        .title("Error")
        .delay_ms(VALIDATION_DELAY_MS)
        .variant(ToastVariant::Destructive);
    assert_eq!(config.title.as_deref(), Some("Error"));
    assert_eq!(config.delay_ms, 3000);
    assert_eq!(config.variant.class(), "toast toast--destructive");
}

#[test]
fn show_assigns_increasing_ids_and_replaces() {
    let mut state = ToastState::default();
    let first = state.show(ToastConfig::success("uno"));
    let second = state.show(ToastConfig::error("dos"));
    assert!(second > first);
    let current = state.current.as_ref().unwrap();
    assert_eq!(current.id, second);
    assert_eq!(current.config.message, "dos");
}

#[test]
fn dismissing_stale_id_keeps_current() {
    let mut state = ToastState::default();
    let first = state.show(ToastConfig::new("uno"));
    let second = state.show(ToastConfig::new("dos"));

    state.dismiss(first);
    assert_eq!(state.current.as_ref().map(|t| t.id), Some(second));

    state.dismiss(second);
    assert_eq!(state.current, None);
}
