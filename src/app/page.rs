use std::rc::Rc;

use gtk4::prelude::*;
use gtk4::{
    AccessibleRole, Align, Application, ApplicationWindow, Box as GtkBox, Button, DrawingArea,
    Fixed, FlowBox, Label, MediaFile, Orientation, Overlay, Picture, PolicyType, ScrolledWindow,
    SelectionMode,
};

use crate::config::{ShowcaseManifest, TileEntry, TimelineEntry};
use crate::preview::MediaKind;
use crate::ui::{
    chip_label, modal_close_button, timeline_item_button, topbar_region, StyleTokens,
};

/// One feed tile: the pressable root, its media box, and the stream
/// handle for video tiles (participates in visibility autoplay).
pub(super) struct TileWidgets {
    pub root: GtkBox,
    pub media: GtkBox,
    pub stream: Option<MediaFile>,
}

/// Everything the runtimes wire against. Built once at activation; the
/// widget tree owns the layout, the runtimes own the behavior.
pub(super) struct PageWidgets {
    pub window: ApplicationWindow,
    pub fog_area: DrawingArea,
    pub scroller: ScrolledWindow,
    pub topbar: GtkBox,
    pub topbar_regions: Vec<Label>,
    pub tiles: Vec<TileWidgets>,
    pub timeline_box: GtkBox,
    pub timeline_items: Vec<(Button, TimelineEntry)>,
    pub preview_layer: Fixed,
    pub preview_card: GtkBox,
    pub preview_media_wrap: GtkBox,
    pub preview_media: GtkBox,
    pub preview_chip: Label,
    pub info_toggle: Button,
    pub info_panel: GtkBox,
    pub info_backdrop: GtkBox,
    pub modal: Overlay,
    pub modal_backdrop: GtkBox,
    pub modal_frame: GtkBox,
    pub modal_close: Button,
}

pub(super) fn build_page(
    app: &Application,
    manifest: &Rc<ShowcaseManifest>,
    tokens: StyleTokens,
) -> PageWidgets {
    let window = ApplicationWindow::new(app);
    window.set_title(Some("vitrine"));
    window.set_default_size(tokens.window_default_width, tokens.window_default_height);
    window.add_css_class("vitrine-root");

    let root = Overlay::new();

    let fog_area = DrawingArea::new();
    fog_area.add_css_class("fog");
    fog_area.set_hexpand(true);
    fog_area.set_vexpand(true);
    root.set_child(Some(&fog_area));

    // scrolling page: timeline column beside the feed grid
    let (scroller, timeline_box, timeline_items, tiles) = build_scroll_content(manifest, tokens);
    root.add_overlay(&scroller);

    let (topbar, topbar_regions, info_toggle) = build_topbar(manifest, tokens);
    root.add_overlay(&topbar);

    let (info_backdrop, info_panel) = build_info_panel(manifest);
    root.add_overlay(&info_backdrop);
    root.add_overlay(&info_panel);

    let (preview_layer, preview_card, preview_media_wrap, preview_media, preview_chip) =
        build_preview_layer(tokens);
    root.add_overlay(&preview_layer);

    let (modal, modal_backdrop, modal_frame, modal_close) = build_modal();
    root.add_overlay(&modal);

    window.set_child(Some(&root));

    PageWidgets {
        window,
        fog_area,
        scroller,
        topbar,
        topbar_regions,
        tiles,
        timeline_box,
        timeline_items,
        preview_layer,
        preview_card,
        preview_media_wrap,
        preview_media,
        preview_chip,
        info_toggle,
        info_panel,
        info_backdrop,
        modal,
        modal_backdrop,
        modal_frame,
        modal_close,
    }
}

fn build_scroll_content(
    manifest: &Rc<ShowcaseManifest>,
    tokens: StyleTokens,
) -> (
    ScrolledWindow,
    GtkBox,
    Vec<(Button, TimelineEntry)>,
    Vec<TileWidgets>,
) {
    let columns = GtkBox::new(Orientation::Horizontal, tokens.spacing_24);
    columns.set_margin_top(tokens.topbar_height + tokens.spacing_16);
    columns.set_margin_bottom(tokens.spacing_24);
    columns.set_margin_start(tokens.spacing_24);
    columns.set_margin_end(tokens.spacing_24);

    let timeline_box = GtkBox::new(Orientation::Vertical, tokens.spacing_8);
    timeline_box.add_css_class("timeline-box");
    timeline_box.set_width_request(tokens.timeline_width);
    timeline_box.set_valign(Align::Start);

    let mut timeline_items = Vec::with_capacity(manifest.timeline.len());
    for entry in &manifest.timeline {
        let button = timeline_item_button(&entry.label);
        timeline_box.append(&button);
        timeline_items.push((button, entry.clone()));
    }
    columns.append(&timeline_box);

    let feed = FlowBox::new();
    feed.add_css_class("feed");
    feed.set_selection_mode(SelectionMode::None);
    feed.set_column_spacing(tokens.spacing_16 as u32);
    feed.set_row_spacing(tokens.spacing_16 as u32);
    feed.set_max_children_per_line(3);
    feed.set_hexpand(true);
    feed.set_valign(Align::Start);

    let mut tiles = Vec::with_capacity(manifest.tiles.len());
    for entry in &manifest.tiles {
        let tile = build_tile(entry, tokens);
        feed.insert(&tile.root, -1);
        tiles.push(tile);
    }
    columns.append(&feed);

    let scroller = ScrolledWindow::new();
    scroller.set_policy(PolicyType::Never, PolicyType::Automatic);
    scroller.set_hexpand(true);
    scroller.set_vexpand(true);
    scroller.set_child(Some(&columns));

    (scroller, timeline_box, timeline_items, tiles)
}

fn build_tile(entry: &TileEntry, tokens: StyleTokens) -> TileWidgets {
    let root = GtkBox::builder()
        .orientation(Orientation::Vertical)
        .spacing(tokens.spacing_8)
        .accessible_role(AccessibleRole::Button)
        .build();
    root.add_css_class("tile");
    root.set_focusable(true);

    let media = GtkBox::new(Orientation::Vertical, 0);
    media.add_css_class("tile-media");
    media.set_size_request(tokens.tile_width, tokens.tile_height);

    let stream = match (
        MediaKind::parse(entry.media_type.as_deref()),
        entry.media_src.as_deref(),
    ) {
        (MediaKind::Video, Some(src)) => {
            let file = if src.contains("://") {
                gtk4::gio::File::for_uri(src)
            } else {
                gtk4::gio::File::for_path(src)
            };
            let media_file = MediaFile::for_file(&file);
            media_file.set_muted(true);
            media_file.set_loop(true);
            let picture = Picture::for_paintable(&media_file);
            picture.set_can_shrink(true);
            picture.set_hexpand(true);
            picture.set_vexpand(true);
            media.append(&picture);
            Some(media_file)
        }
        (MediaKind::Image, Some(src)) => {
            let file = if src.contains("://") {
                gtk4::gio::File::for_uri(src)
            } else {
                gtk4::gio::File::for_path(src)
            };
            let picture = Picture::for_file(&file);
            picture.set_can_shrink(true);
            picture.set_hexpand(true);
            picture.set_vexpand(true);
            media.append(&picture);
            None
        }
        _ => None,
    };

    root.append(&media);
    let caption = Label::new(Some(&entry.label));
    caption.add_css_class("tile-caption");
    caption.set_halign(Align::Start);
    root.append(&caption);

    TileWidgets {
        root,
        media,
        stream,
    }
}

fn build_topbar(
    manifest: &Rc<ShowcaseManifest>,
    tokens: StyleTokens,
) -> (GtkBox, Vec<Label>, Button) {
    let topbar = GtkBox::new(Orientation::Horizontal, tokens.spacing_16);
    topbar.add_css_class("topbar-overlay");
    topbar.set_valign(Align::Start);
    topbar.set_height_request(tokens.topbar_height);

    let brand = topbar_region(&manifest.topbar.brand, "topbar-brand");
    brand.set_halign(Align::Start);
    let center = topbar_region(&manifest.topbar.center, "topbar-center");
    center.set_hexpand(true);
    center.set_halign(Align::Center);
    let right = topbar_region(&manifest.topbar.right, "topbar-right");
    right.set_halign(Align::End);

    let info_toggle = Button::with_label("Info");
    info_toggle.add_css_class("flat");
    info_toggle.add_css_class("info-toggle");
    info_toggle.set_valign(Align::Center);

    topbar.append(&brand);
    topbar.append(&center);
    topbar.append(&right);
    topbar.append(&info_toggle);

    (topbar, vec![brand, center, right], info_toggle)
}

fn build_info_panel(manifest: &Rc<ShowcaseManifest>) -> (GtkBox, GtkBox) {
    let backdrop = GtkBox::new(Orientation::Vertical, 0);
    backdrop.add_css_class("info-backdrop");
    backdrop.set_hexpand(true);
    backdrop.set_vexpand(true);
    backdrop.set_visible(false);

    let panel = GtkBox::new(Orientation::Vertical, 0);
    panel.add_css_class("info-panel");
    panel.set_halign(Align::Center);
    panel.set_valign(Align::Center);
    panel.set_visible(false);
    let text = Label::new(Some(&manifest.info_text));
    text.set_wrap(true);
    panel.append(&text);

    (backdrop, panel)
}

fn build_preview_layer(tokens: StyleTokens) -> (Fixed, GtkBox, GtkBox, GtkBox, Label) {
    let layer = Fixed::new();
    layer.add_css_class("preview-layer");
    layer.set_can_target(false);
    layer.set_hexpand(true);
    layer.set_vexpand(true);
    layer.update_state(&[gtk4::accessible::State::Hidden(true)]);

    let card = GtkBox::new(Orientation::Vertical, tokens.spacing_8);
    card.add_css_class("preview-card");
    card.add_css_class("size-iphone");

    let media_wrap = GtkBox::new(Orientation::Vertical, 0);
    media_wrap.add_css_class("preview-media-wrap");
    media_wrap.add_css_class("aspect-iphone");
    media_wrap.set_hexpand(true);
    media_wrap.set_vexpand(true);

    let media = GtkBox::new(Orientation::Vertical, 0);
    media.add_css_class("preview-media");
    media.set_hexpand(true);
    media.set_vexpand(true);
    media_wrap.append(&media);
    card.append(&media_wrap);

    let chip = chip_label();
    card.append(&chip);

    layer.put(&card, 0.0, 0.0);

    (layer, card, media_wrap, media, chip)
}

fn build_modal() -> (Overlay, GtkBox, GtkBox, Button) {
    let modal = Overlay::builder()
        .accessible_role(AccessibleRole::Dialog)
        .build();
    modal.add_css_class("mobile-modal");
    modal.set_visible(false);
    modal.update_state(&[gtk4::accessible::State::Hidden(true)]);

    let backdrop = GtkBox::new(Orientation::Vertical, 0);
    backdrop.add_css_class("modal-backdrop");
    backdrop.add_css_class("modal-close");
    backdrop.set_hexpand(true);
    backdrop.set_vexpand(true);
    modal.set_child(Some(&backdrop));

    let content = GtkBox::new(Orientation::Vertical, 8);
    content.add_css_class("modal-content");
    content.set_halign(Align::Center);
    content.set_valign(Align::Center);

    let close = modal_close_button();
    content.append(&close);

    let frame = GtkBox::new(Orientation::Vertical, 0);
    frame.add_css_class("mobile-frame");
    frame.add_css_class("is-iphone");
    content.append(&frame);

    modal.add_overlay(&content);

    (modal, backdrop, frame, close)
}
