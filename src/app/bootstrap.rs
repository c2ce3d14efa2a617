
/// Whether ambient animation is allowed. Mirrors the reduced-motion
/// preference: read once at startup, not re-evaluated.
pub(super) fn motion_enabled() -> bool {
    let Some(settings) = gtk4::Settings::default() else {
        return true;
    };
    let enabled = settings.is_gtk_enable_animations();
    if !enabled {
        tracing::info!("animations disabled by system preference");
    }
    enabled
}
