use snackflow_bridge::showcase::Showcase;

/// Handles a pressed demo button (see
/// [`snackflow_bridge::MessageToBackend::ShowSnackbar`]).
pub fn handle_show_snackbar(context: super::AppContextHandle, showcase: Showcase) {
    log::info!("Enqueueing {} snackbar", showcase.label());
    context.view_model.show(showcase);
}
