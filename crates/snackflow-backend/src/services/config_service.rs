use snackflow_bridge::MessageFromBackend;

/// Handles an incoming configuration request (see
/// [`snackflow_bridge::MessageToBackend::ConfigurationRequest`]).
pub async fn handle_config_request(context: super::AppContextHandle) {
    let config = {
        let state = context.state.read().await;
        state.config.clone()
    };
    context
        .send(MessageFromBackend::ConfigurationResponse(config))
        .await;
}

/// Handles a locale selection, persists it and sends the updated
/// configuration back.
pub async fn handle_locale_selection(context: super::AppContextHandle, locale: String) {
    let config = {
        let mut state = context.state.write().await;
        if state.config.locale == locale {
            log::debug!("Locale {locale} is already selected");
        } else {
            state.config.locale = locale;
            // persist the selection so it is remembered across runs
            if let Some(path) = &state.config_path {
                if let Err(err) = crate::config::save_config(path, &state.config).await {
                    log::error!("Failed to save selected locale: {err}");
                }
            }
        }
        state.config.clone()
    };

    log::info!("Resolving string resources in locale {}", config.locale);
    context
        .send(MessageFromBackend::ConfigurationResponse(config))
        .await;
}
