use gtk4::prelude::*;
use gtk4::{gio, MediaControls, MediaFile, Overlay, Picture, Video, Widget};

use crate::modal::{is_video_source, ModalRequest};
use crate::preview::MediaKind;

/// Rendered preview media plus the stream handle the runtime pauses on
/// hide. Images carry no stream.
pub struct PreviewMediaHandle {
    pub widget: Widget,
    pub stream: Option<MediaFile>,
}

fn file_for_source(source: &str) -> gio::File {
    if source.contains("://") {
        gio::File::for_uri(source)
    } else {
        gio::File::for_path(source)
    }
}

/// Builds the preview card's media element. Video sources get a muted,
/// looping stream with playback attempted immediately and again once the
/// stream reports prepared; if the stream errors instead, the hidden
/// control strip is revealed so playback can be started manually.
pub fn build_preview_media(kind: MediaKind, source: &str) -> PreviewMediaHandle {
    match kind {
        MediaKind::Video => {
            let media = MediaFile::for_file(&file_for_source(source));
            media.set_muted(true);
            media.set_loop(true);

            let picture = Picture::for_paintable(&media);
            picture.set_can_shrink(true);
            picture.set_hexpand(true);
            picture.set_vexpand(true);

            let controls = MediaControls::builder()
                .media_stream(&media)
                .visible(false)
                .valign(gtk4::Align::End)
                .build();

            let overlay = Overlay::new();
            overlay.set_child(Some(&picture));
            overlay.add_overlay(&controls);

            {
                let controls = controls.clone();
                media.connect_notify_local(Some("error"), move |stream, _| {
                    if let Some(err) = stream.error() {
                        tracing::debug!(%err, "preview stream failed; revealing controls");
                        controls.set_visible(true);
                    }
                });
            }
            media.connect_notify_local(Some("prepared"), |stream, _| {
                if stream.is_prepared() {
                    stream.play();
                }
            });
            media.play();

            PreviewMediaHandle {
                widget: overlay.upcast(),
                stream: Some(media),
            }
        }
        MediaKind::Image => {
            let picture = Picture::for_file(&file_for_source(source));
            picture.set_can_shrink(true);
            picture.set_hexpand(true);
            picture.set_vexpand(true);
            PreviewMediaHandle {
                widget: picture.upcast(),
                stream: None,
            }
        }
    }
}

/// Builds the mobile modal's media element: `.mp4` sources get a video
/// player with its native controls, everything else a picture labelled
/// with the alt text for assistive technology.
pub fn build_modal_media(request: &ModalRequest) -> Widget {
    if is_video_source(&request.media) {
        let media = MediaFile::for_file(&file_for_source(&request.media));
        let video = Video::new();
        video.set_media_stream(Some(&media));
        video.set_autoplay(false);
        video.set_hexpand(true);
        video.set_vexpand(true);
        video.update_property(&[gtk4::accessible::Property::Label(&request.alt)]);
        video.upcast()
    } else {
        let picture = Picture::for_file(&file_for_source(&request.media));
        picture.set_can_shrink(true);
        picture.set_keep_aspect_ratio(true);
        picture.set_hexpand(true);
        picture.set_vexpand(true);
        picture.update_property(&[gtk4::accessible::Property::Label(&request.alt)]);
        picture.upcast()
    }
}
