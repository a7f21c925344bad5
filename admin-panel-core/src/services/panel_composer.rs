//! Panel content composition
//!
//! Wraps raw panel content in the pjax container and layers the optional scripts on top,
//! always in the same order:
//! 1. animation class/style on the container, plus its cleanup script
//! 2. sidebar collapse script
//! 3. auto refresh script
//! 4. minification (production only), applied to the fully composed string

use std::fmt::Write as _;
use std::sync::Arc;

use crate::traits::Compressor;
use crate::types::{Animation, Html, Panel};
use crate::utils::minify::WhitespaceCompressor;

/// Class carried by every composed panel container
pub const CONTAINER_CLASS: &str = "pjax-container-content";

/// DOM id of the element reloaded by pjax
pub const PJAX_CONTAINER_ID: &str = "pjax-container";

/// Collapses the sidebar by toggling a body-level class
pub const SIDEBAR_COLLAPSE_SCRIPT: &str =
    r#"<script>$("body").addClass("sidebar-collapse")</script>"#;

/// Per-call composition switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Minify the composed content (default: `false`)
    pub production: bool,
    /// Skip the animation wrapper even if one is configured (default: `false`)
    pub suppress_animation: bool,
}

impl RenderOptions {
    #[must_use]
    pub fn production() -> Self {
        Self {
            production: true,
            suppress_animation: false,
        }
    }

    #[must_use]
    pub fn without_animation(mut self) -> Self {
        self.suppress_animation = true;
        self
    }
}

/// Container attributes and cleanup script; produced together or not at all.
#[derive(Debug, Clone, PartialEq, Eq)]
struct AnimationParts {
    class_attr: String,
    style_attr: String,
    cleanup_script: String,
}

impl AnimationParts {
    fn resolve(animation: &Animation, options: RenderOptions) -> Option<Self> {
        if !animation.is_enabled() || options.suppress_animation {
            return None;
        }

        let mut style = String::new();
        if animation.delay != 0.0 {
            let _ = write!(
                style,
                "animation-delay: {d:.6}s;-webkit-animation-delay: {d:.6}s;",
                d = animation.delay
            );
        }
        if animation.duration != 0.0 {
            let _ = write!(
                style,
                "animation-duration: {d:.6}s;-webkit-animation-duration: {d:.6}s;",
                d = animation.duration
            );
        }
        let style_attr = if style.is_empty() {
            String::new()
        } else {
            format!(r#" style="{style}""#)
        };

        Some(Self {
            class_attr: format!(r#" class="{CONTAINER_CLASS} animated {}""#, animation.kind),
            style_attr,
            cleanup_script: format!(
                "<script>\n$('.{CONTAINER_CLASS} .modal.fade').on('show.bs.modal', function (event) {{\n    $('.{CONTAINER_CLASS}').removeClass('{}');\n}});\n</script>",
                animation.kind
            ),
        })
    }
}

/// Script reloading the pjax container after `interval_secs`
#[must_use]
pub fn auto_refresh_script(interval_secs: u32) -> String {
    format!(
        "<script>\nwindow.setTimeout(function(){{\n    $.pjax.reload('#{PJAX_CONTAINER_ID}');\n}}, {});\n</script>",
        u64::from(interval_secs) * 1000
    )
}

/// Applies structural wrapping and script injection to panel content.
///
/// Not idempotent: every call wraps whatever content it is given, so composing an
/// already composed panel nests a second container.
#[derive(Clone)]
pub struct PanelContentComposer {
    compressor: Arc<dyn Compressor>,
}

impl PanelContentComposer {
    #[must_use]
    pub fn new(compressor: Arc<dyn Compressor>) -> Self {
        Self { compressor }
    }

    /// Compose `panel`, returning it with only `content` changed.
    #[must_use]
    pub fn compose(&self, mut panel: Panel, animation: &Animation, options: RenderOptions) -> Panel {
        let parts = AnimationParts::resolve(animation, options);
        log::debug!(
            "Composing panel '{}': animated={}, mini_sidebar={}, auto_refresh={}, production={}",
            panel.title,
            parts.is_some(),
            panel.mini_sidebar,
            panel.auto_refresh,
            options.production
        );

        let AnimationParts {
            class_attr,
            style_attr,
            cleanup_script,
        } = parts.unwrap_or_else(|| AnimationParts {
            class_attr: format!(r#" class="{CONTAINER_CLASS}""#),
            style_attr: String::new(),
            cleanup_script: String::new(),
        });

        let mut content = Html::new(format!(
            "<div{class_attr}{style_attr}>{}</div>{cleanup_script}",
            panel.content
        ));

        if panel.mini_sidebar {
            content.push_str(SIDEBAR_COLLAPSE_SCRIPT);
        }
        if panel.auto_refresh {
            content.push_str(&auto_refresh_script(panel.refresh_interval_secs()));
        }
        if options.production {
            self.compressor.compress(&mut content);
        }

        panel.content = content;
        panel
    }
}

impl Default for PanelContentComposer {
    fn default() -> Self {
        Self::new(Arc::new(WhitespaceCompressor))
    }
}

impl std::fmt::Debug for PanelContentComposer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PanelContentComposer").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::NoopCompressor;

    fn composer() -> PanelContentComposer {
        PanelContentComposer::new(Arc::new(NoopCompressor))
    }

    fn compose(panel: Panel, animation: &Animation) -> String {
        composer()
            .compose(panel, animation, RenderOptions::default())
            .content
            .into_string()
    }

    #[test]
    fn wraps_content_in_plain_container() {
        let out = compose(Panel::new("Users", "<p>hi</p>"), &Animation::default());
        assert_eq!(out, r#"<div class="pjax-container-content"><p>hi</p></div>"#);
    }

    #[test]
    fn wraps_exactly_once_regardless_of_flags() {
        let panel = Panel::new("Users", "<p>hi</p>")
            .with_mini_sidebar(true)
            .with_auto_refresh(vec![5]);
        let out = compose(panel, &Animation::new("fadeIn", 0.5, 1.0));
        assert_eq!(out.matches("<div").count(), 1);
        assert_eq!(out.matches(CONTAINER_CLASS).count(), 3);
        assert!(out.starts_with(r#"<div class="pjax-container-content animated fadeIn""#));
    }

    #[test]
    fn composing_twice_nests_containers() {
        let c = composer();
        let once = c.compose(
            Panel::new("Users", "<p>hi</p>"),
            &Animation::default(),
            RenderOptions::default(),
        );
        let twice = c.compose(once.clone(), &Animation::default(), RenderOptions::default());
        assert_eq!(
            twice.content,
            format!(r#"<div class="pjax-container-content">{}</div>"#, once.content).as_str()
        );
        assert_eq!(twice.content.as_str().matches("<div").count(), 2);
    }

    #[test]
    fn other_fields_are_preserved() {
        let panel = Panel::new("Users", "<p>hi</p>")
            .with_description("All users")
            .with_url("/admin/info/users");
        let out = composer().compose(panel.clone(), &Animation::default(), RenderOptions::default());
        assert_eq!(out.title, panel.title);
        assert_eq!(out.description, panel.description);
        assert_eq!(out.url, panel.url);
        assert_ne!(out.content, panel.content);
    }

    #[test]
    fn sidebar_script_precedes_refresh_script() {
        let panel = Panel::new("Users", "x")
            .with_mini_sidebar(true)
            .with_auto_refresh(vec![]);
        let out = compose(panel, &Animation::default());
        let sidebar = out.find("sidebar-collapse").unwrap();
        let refresh = out.find("$.pjax.reload").unwrap();
        assert!(sidebar < refresh);
        assert!(out.ends_with(&auto_refresh_script(60)));
    }

    #[test]
    fn refresh_defaults_to_sixty_seconds() {
        let out = compose(
            Panel::new("Users", "x").with_auto_refresh(vec![]),
            &Animation::default(),
        );
        assert!(out.contains("}, 60000);"));
    }

    #[test]
    fn refresh_uses_first_interval() {
        let out = compose(
            Panel::new("Users", "x").with_auto_refresh(vec![5, 10]),
            &Animation::default(),
        );
        assert!(out.contains("}, 5000);"));
        assert!(!out.contains("10000"));
        assert!(out.contains("$.pjax.reload('#pjax-container');"));
    }

    #[test]
    fn no_refresh_script_when_disabled() {
        let mut panel = Panel::new("Users", "x");
        panel.refresh_interval = vec![5];
        let out = compose(panel, &Animation::default());
        assert!(!out.contains("setTimeout"));
    }

    #[test]
    fn empty_animation_type_emits_nothing_animated() {
        let out = compose(Panel::new("Users", "x"), &Animation::new("", 1.0, 2.0));
        assert!(!out.contains("animated"));
        assert!(!out.contains("style="));
        assert!(!out.contains("<script>"));
    }

    #[test]
    fn animation_without_timing_has_class_and_cleanup_but_no_style() {
        let out = compose(Panel::new("Users", "x"), &Animation::new("fade", 0.0, 0.0));
        assert!(out.starts_with(r#"<div class="pjax-container-content animated fade">"#));
        assert!(!out.contains("style="));
        assert!(out.contains(".removeClass('fade');"));
        assert!(out.contains("on('show.bs.modal'"));
    }

    #[test]
    fn delay_and_duration_co_occur() {
        let out = compose(Panel::new("Users", "x"), &Animation::new("fadeInUp", 0.5, 1.0));
        assert!(out.starts_with(
            r#"<div class="pjax-container-content animated fadeInUp" style="animation-delay: 0.500000s;-webkit-animation-delay: 0.500000s;animation-duration: 1.000000s;-webkit-animation-duration: 1.000000s;">x</div><script>"#
        ));
    }

    #[test]
    fn duration_only_style() {
        let out = compose(Panel::new("Users", "x"), &Animation::new("fadeIn", 0.0, 2.0));
        assert!(out.contains(
            r#" style="animation-duration: 2.000000s;-webkit-animation-duration: 2.000000s;""#
        ));
        assert!(!out.contains("animation-delay"));
    }

    #[test]
    fn suppressed_animation_emits_nothing_animated() {
        let out = composer()
            .compose(
                Panel::new("Users", "x"),
                &Animation::new("fade", 0.5, 0.0),
                RenderOptions::default().without_animation(),
            )
            .content
            .into_string();
        assert_eq!(out, r#"<div class="pjax-container-content">x</div>"#);
    }

    #[test]
    fn production_minifies_after_all_scripts() {
        let panel = Panel::new("Users", "<div>\n  <p>hi</p>\n</div>\n")
            .with_mini_sidebar(true)
            .with_auto_refresh(vec![5]);
        let out = PanelContentComposer::default()
            .compose(panel, &Animation::default(), RenderOptions::production())
            .content
            .into_string();
        assert!(out.starts_with(
            r#"<div class="pjax-container-content"><div><p>hi</p></div></div>"#
        ));
        assert!(out.contains(SIDEBAR_COLLAPSE_SCRIPT));
        assert!(out.ends_with(
            "<script>window.setTimeout(function(){\n$.pjax.reload('#pjax-container');\n}, 5000);</script>"
        ));
    }

    #[test]
    fn caller_panel_is_untouched() {
        let panel = Panel::new("Users", "<p>hi</p>");
        let _ = composer().compose(panel.clone(), &Animation::default(), RenderOptions::default());
        assert_eq!(panel.content, "<p>hi</p>");
    }
}
