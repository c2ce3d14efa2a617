use crate::ui::StyleTokens;
use gtk4::CssProvider;

pub(super) fn install_runtime_css(tokens: StyleTokens, motion_enabled: bool) {
    let motion_standard_ms = if motion_enabled {
        tokens.motion_standard_ms
    } else {
        0
    };
    let motion_hover_ms = if motion_enabled {
        tokens.motion_hover_ms
    } else {
        0
    };
    let css = format!(
        "
window.vitrine-root {{
  background: #0b0d12;
  color: rgba(235, 238, 245, 0.92);
}}
.topbar-overlay {{
  padding: 0 {spacing_24}px;
  background: rgba(11, 13, 18, 0.0);
  transition: background {motion_standard_ms}ms cubic-bezier(0.4, 0, 0.2, 1),
              color {motion_standard_ms}ms cubic-bezier(0.4, 0, 0.2, 1);
}}
.topbar-overlay.is-over-tiles {{
  background: rgba(235, 238, 245, 0.06);
  color: #ffffff;
}}
.topbar-brand {{
  font-weight: 700;
}}
.timeline-box {{
  padding: {spacing_16}px 0;
}}
button.timeline-item {{
  border-radius: {control_radius}px;
  padding: {spacing_12}px {spacing_16}px;
  background: transparent;
  transition: background {motion_hover_ms}ms ease;
}}
button.timeline-item:hover,
button.timeline-item:focus-visible {{
  background: rgba(235, 238, 245, 0.08);
}}
.preview-layer {{
  opacity: 0;
  transition: opacity {motion_hover_ms}ms ease;
}}
.preview-layer.is-visible {{
  opacity: 1;
}}
.preview-card {{
  border-radius: {card_radius}px;
  border: {border_width}px solid rgba(235, 238, 245, 0.14);
  background: #11141b;
  padding: {spacing_8}px;
  box-shadow: 0 2px 8px rgba(0, 0, 0, 0.20),
              0 16px 48px rgba(0, 0, 0, 0.35);
}}
.preview-media-wrap {{
  border-radius: {control_radius}px;
  background: #0b0d12;
}}
.preview-chip {{
  border-radius: {control_radius}px;
  padding: {spacing_4}px {spacing_12}px;
  background: rgba(235, 238, 245, 0.10);
  font-size: 12px;
}}
.tile {{
  border-radius: {card_radius}px;
  padding: {spacing_8}px;
  transition: background {motion_hover_ms}ms ease;
}}
.tile.is-hovered {{
  background: rgba(235, 238, 245, 0.05);
}}
.tile.is-pressed {{
  background: rgba(235, 238, 245, 0.12);
}}
.tile-media {{
  border-radius: {control_radius}px;
  background: #11141b;
}}
.tile-caption {{
  font-size: 13px;
  color: rgba(235, 238, 245, 0.65);
}}
.mobile-modal .modal-backdrop {{
  background: rgba(0, 0, 0, 0.7);
}}
.modal-content {{
  border-radius: {panel_radius}px;
  border: {border_width}px solid rgba(235, 238, 245, 0.14);
  background: #11141b;
  padding: {spacing_16}px;
}}
.info-panel {{
  border-radius: {panel_radius}px;
  border: {border_width}px solid rgba(235, 238, 245, 0.14);
  background: #11141b;
  padding: {spacing_24}px;
}}
.info-backdrop {{
  background: rgba(0, 0, 0, 0.5);
}}
",
        spacing_4 = tokens.spacing_4,
        spacing_8 = tokens.spacing_8,
        spacing_12 = tokens.spacing_12,
        spacing_16 = tokens.spacing_16,
        spacing_24 = tokens.spacing_24,
        card_radius = tokens.card_radius,
        panel_radius = tokens.panel_radius,
        control_radius = tokens.control_radius,
        border_width = tokens.border_width,
        motion_standard_ms = motion_standard_ms,
        motion_hover_ms = motion_hover_ms,
    );

    let provider = CssProvider::new();
    provider.load_from_data(&css);
    if let Some(display) = gtk4::gdk::Display::default() {
        gtk4::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}
