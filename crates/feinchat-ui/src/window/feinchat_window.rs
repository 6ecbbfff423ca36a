//! Main Fein-AI window with two-panel layout
//!
//! - Sidebar (320px): Logo + chat history
//! - MainPanel (flex-1): Transcript + topic carousel + composer

use chrono::Local;
use feinchat_core::{ChatMessage, PendingReply, SessionState, Topic, REPLY_DELAY};
use feinchat_ui::{
    components::{svg_icon, topic_icon, IconName, IconSize, TextInput},
    layout, Theme,
};
use gpui::prelude::FluentBuilder;
use gpui::*;
use tracing::info;

/// Topic cards visible per carousel page
const TOPICS_PER_PAGE: usize = 3;

fn topic_page_count() -> usize {
    Topic::ALL.len().div_ceil(TOPICS_PER_PAGE)
}

fn topics_on_page(page: usize) -> &'static [Topic] {
    const ALL: &[Topic] = &Topic::ALL;
    let start = (page * TOPICS_PER_PAGE).min(ALL.len());
    let end = (start + TOPICS_PER_PAGE).min(ALL.len());
    &ALL[start..end]
}

fn message_time_label(message: &ChatMessage) -> String {
    message
        .sent_at
        .with_timezone(&Local)
        .format("%H:%M")
        .to_string()
}

// ============================================================================
// Window State
// ============================================================================

pub struct FeinChatWindow {
    theme: Theme,
    /// Chat session owned exclusively by this window
    session: SessionState,
    /// Composer input component
    message_input: View<TextInput>,
    /// Current carousel page
    carousel_page: usize,
    /// In-flight simulated replies. Held, not detached: dropping the window
    /// cancels every pending timer, so nothing mutates state after teardown.
    pending_replies: Vec<Task<()>>,
    /// Scroll handle for the transcript (auto-scroll to newest)
    message_scroll_handle: ScrollHandle,
    /// Focus handle
    focus_handle: FocusHandle,
}

impl FeinChatWindow {
    pub fn new(cx: &mut ViewContext<Self>, theme: Theme, session: SessionState) -> Self {
        let focus_handle = cx.focus_handle();

        // Create composer input
        let message_input = cx.new_view(|cx| {
            let mut input = TextInput::new(cx);
            input.set_placeholder("Ask me about investments...");
            input
        });

        // Keep the session draft in sync with the input, and re-render on
        // every edit (send button styling tracks input emptiness).
        cx.observe(&message_input, |this, input, cx| {
            let text = input.read(cx).content().to_string();
            this.session.update_draft(text);
            cx.notify();
        })
        .detach();

        Self {
            theme,
            session,
            message_input,
            carousel_page: 0,
            pending_replies: Vec::new(),
            message_scroll_handle: ScrollHandle::new(),
            focus_handle,
        }
    }

    // ========================================================================
    // Event Handlers
    // ========================================================================

    fn handle_send(&mut self, cx: &mut ViewContext<Self>) {
        // Empty or whitespace-only drafts are silently ignored
        let Some(pending) = self.session.submit_draft() else {
            return;
        };

        info!(message_id = pending.in_reply_to, "message sent");

        self.message_input.update(cx, |input, cx| input.clear(cx));
        self.schedule_reply(pending, cx);
        self.scroll_to_latest();
        cx.notify();
    }

    /// Schedule the one-shot simulated reply for a submitted message.
    fn schedule_reply(&mut self, pending: PendingReply, cx: &mut ViewContext<Self>) {
        let task = cx.spawn(|view, mut cx| async move {
            cx.background_executor().timer(REPLY_DELAY).await;

            let _ = view.update(&mut cx, |this, cx| {
                this.session.complete_reply(pending);
                this.scroll_to_latest();
                cx.notify();
            });
        });
        self.pending_replies.push(task);
    }

    fn select_topic(&mut self, id: u64, cx: &mut ViewContext<Self>) {
        self.session.select_topic(id);

        // Push the prefilled draft back into the input and focus it
        let draft = self.session.draft().to_string();
        self.message_input
            .update(cx, |input, cx| input.set_content(draft, cx));
        let handle = self.message_input.read(cx).focus_handle(cx);
        cx.focus(&handle);
        cx.notify();
    }

    fn carousel_prev(&mut self, cx: &mut ViewContext<Self>) {
        if self.carousel_page > 0 {
            self.carousel_page -= 1;
            cx.notify();
        }
    }

    fn carousel_next(&mut self, cx: &mut ViewContext<Self>) {
        if self.carousel_page + 1 < topic_page_count() {
            self.carousel_page += 1;
            cx.notify();
        }
    }

    fn scroll_to_latest(&self) {
        let count = self.session.messages().len();
        if count > 0 {
            self.message_scroll_handle.scroll_to_item(count - 1);
        }
    }

    // ========================================================================
    // Sidebar
    // ========================================================================

    fn render_sidebar(&self) -> impl IntoElement {
        let colors = &self.theme.colors;

        div()
            .id("sidebar")
            .w(px(layout::SIDEBAR_WIDTH))
            .flex_shrink_0()
            .h_full()
            .overflow_hidden()
            .flex()
            .flex_col()
            .bg(rgb(colors.sidebar_bg))
            .border_r_1()
            .border_color(rgb(colors.border))
            .child(self.render_logo_header())
            .child(self.render_history_list())
    }

    fn render_logo_header(&self) -> impl IntoElement {
        let colors = &self.theme.colors;

        div()
            .w_full()
            .h(px(layout::LOGO_HEADER_HEIGHT))
            .flex_shrink_0()
            .p(px(self.theme.spacing.xl))
            .flex()
            .items_center()
            .gap(px(self.theme.spacing.md))
            .border_b_1()
            .border_color(rgb(colors.border))
            .child(
                div()
                    .w(px(40.0))
                    .h(px(40.0))
                    .rounded(px(layout::BORDER_RADIUS))
                    .bg(rgb(colors.primary))
                    .flex()
                    .items_center()
                    .justify_center()
                    .child(
                        svg_icon(IconName::TrendingUp, IconSize::Large)
                            .text_color(rgb(colors.text_on_primary)),
                    ),
            )
            .child(
                div()
                    .text_lg()
                    .font_weight(FontWeight::BOLD)
                    .text_color(rgb(colors.text_primary))
                    .child("Fein-AI"),
            )
    }

    fn render_history_list(&self) -> impl IntoElement {
        let colors = &self.theme.colors;
        let now = chrono::Utc::now();

        div()
            .flex_1()
            .min_h_0()
            .flex()
            .flex_col()
            .p(px(16.0))
            .child(
                div()
                    .mb(px(16.0))
                    .text_xs()
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(rgb(colors.text_secondary))
                    .child("Chat History"),
            )
            .child(
                div()
                    .id("history-list")
                    .flex_1()
                    .min_h_0()
                    .overflow_y_scroll()
                    .child(
                        div()
                            .flex()
                            .flex_col()
                            .gap(px(12.0))
                            .children(self.session.history().iter().map(|summary| {
                                let date_label = summary.updated_label(now);

                                div()
                                    .id(SharedString::from(format!("history-{}", summary.id)))
                                    .w_full()
                                    .p(px(12.0))
                                    .rounded(px(layout::BORDER_RADIUS))
                                    .bg(rgb(colors.surface))
                                    .cursor_pointer()
                                    .hover(|s| s.bg(rgb(colors.surface_elevated)))
                                    .child(
                                        div()
                                            .mb(px(4.0))
                                            .text_sm()
                                            .font_weight(FontWeight::MEDIUM)
                                            .text_color(rgb(colors.text_primary))
                                            .child(summary.title.clone()),
                                    )
                                    .child(
                                        div()
                                            .w_full()
                                            .text_xs()
                                            .text_color(rgb(colors.text_secondary))
                                            .whitespace_nowrap()
                                            .text_ellipsis()
                                            .overflow_hidden()
                                            .child(summary.preview.clone()),
                                    )
                                    .child(
                                        div()
                                            .mt(px(4.0))
                                            .text_xs()
                                            .text_color(rgb(colors.text_faint))
                                            .child(date_label),
                                    )
                            })),
                    ),
            )
    }

    // ========================================================================
    // Main Panel
    // ========================================================================

    fn render_main_panel(&mut self, cx: &mut ViewContext<Self>) -> impl IntoElement {
        let colors = self.theme.colors.clone();

        div()
            .id("main-panel")
            .flex_1()
            .h_full()
            .min_w_0()
            .min_h_0()
            .flex()
            .flex_col()
            .overflow_hidden()
            .bg(rgb(colors.panel_bg))
            .child(self.render_transcript())
            .child(self.render_topic_carousel(cx))
            .child(self.render_composer(cx))
    }

    fn render_transcript(&self) -> impl IntoElement {
        let colors = &self.theme.colors;

        // Keep the scroll container as a real flex child (flex_1 + min_h_0)
        // so it always has a constrained height and can overflow-scroll.
        div()
            .id("transcript")
            .flex_1()
            .min_h_0()
            .w_full()
            .overflow_y_scroll()
            .track_scroll(&self.message_scroll_handle)
            .flex()
            .flex_col()
            .px(px(16.0))
            .pt(px(16.0))
            .gap(px(16.0))
            .children(
                self.session
                    .messages()
                    .iter()
                    .map(|message| self.render_message(message, colors)),
            )
            // Spacer to keep a comfortable gap under the newest message
            .child(div().w_full().h(px(16.0)).flex_shrink_0())
    }

    fn render_message(
        &self,
        message: &ChatMessage,
        colors: &feinchat_ui::ThemeColors,
    ) -> impl IntoElement {
        let is_user = message.is_user();
        let time_label = message_time_label(message);

        div()
            .id(SharedString::from(format!("message-{}", message.id)))
            .w_full()
            .flex_shrink_0()
            .flex()
            .when(is_user, |el| el.justify_end())
            .when(!is_user, |el| el.justify_start())
            .child(
                div()
                    .max_w(px(layout::BUBBLE_MAX_WIDTH))
                    .px(px(16.0))
                    .py(px(12.0))
                    .rounded(px(layout::BORDER_RADIUS))
                    .when(is_user, |el| {
                        el.bg(rgb(colors.primary))
                            .text_color(rgb(colors.text_on_primary))
                    })
                    .when(!is_user, |el| {
                        el.bg(rgb(colors.surface_elevated))
                            .text_color(rgb(colors.text_primary))
                    })
                    .child(div().text_sm().child(message.text.clone()))
                    .child(
                        div()
                            .mt(px(8.0))
                            .text_xs()
                            .when(is_user, |el| {
                                el.text_color(rgba(colors.text_on_primary.with_alpha(0.6)))
                            })
                            .when(!is_user, |el| el.text_color(rgb(colors.text_faint)))
                            .child(time_label),
                    ),
            )
    }

    // ========================================================================
    // Topic Carousel
    // ========================================================================

    fn render_topic_carousel(&self, cx: &mut ViewContext<Self>) -> impl IntoElement {
        let colors = &self.theme.colors;
        let page = self.carousel_page;
        let at_start = page == 0;
        let at_end = page + 1 >= topic_page_count();

        div()
            .id("topic-carousel")
            .w_full()
            .flex_shrink_0()
            .p(px(16.0))
            .flex()
            .flex_col()
            .gap(px(12.0))
            .border_t_1()
            .border_color(rgb(colors.border))
            .child(
                div()
                    .text_sm()
                    .font_weight(FontWeight::MEDIUM)
                    .text_color(rgb(colors.text_secondary))
                    .child("Select an investment topic:"),
            )
            .child(
                div()
                    .w_full()
                    .flex()
                    .items_center()
                    .gap(px(12.0))
                    .child(self.render_carousel_control(
                        "carousel-prev",
                        IconName::ChevronLeft,
                        at_start,
                        cx,
                    ))
                    .child(
                        div()
                            .flex_1()
                            .min_w_0()
                            .flex()
                            .gap(px(12.0))
                            .children(
                                topics_on_page(page)
                                    .iter()
                                    .map(|topic| self.render_topic_card(*topic, cx)),
                            ),
                    )
                    .child(self.render_carousel_control(
                        "carousel-next",
                        IconName::ChevronRight,
                        at_end,
                        cx,
                    )),
            )
    }

    fn render_carousel_control(
        &self,
        id: &'static str,
        icon: IconName,
        disabled: bool,
        cx: &mut ViewContext<Self>,
    ) -> impl IntoElement {
        let colors = &self.theme.colors;
        let forward = icon == IconName::ChevronRight;

        div()
            .id(id)
            .w(px(28.0))
            .h(px(28.0))
            .flex_shrink_0()
            .flex()
            .items_center()
            .justify_center()
            .rounded_full()
            .bg(rgb(colors.surface_elevated))
            .border_1()
            .border_color(rgb(colors.border_subtle))
            .when(!disabled, |el| {
                el.cursor_pointer()
                    .hover(|s| s.bg(rgba(colors.hover)))
                    .on_click(cx.listener(move |this, _, cx| {
                        if forward {
                            this.carousel_next(cx);
                        } else {
                            this.carousel_prev(cx);
                        }
                    }))
            })
            .child(svg_icon(icon, IconSize::Small).text_color(if disabled {
                rgb(colors.text_faint)
            } else {
                rgb(colors.text_primary)
            }))
    }

    fn render_topic_card(&self, topic: Topic, cx: &mut ViewContext<Self>) -> impl IntoElement {
        let colors = &self.theme.colors;
        let is_selected = self.session.selected_topic() == Some(topic);
        let topic_id = topic.id();

        div()
            .id(SharedString::from(format!("topic-{}", topic_id)))
            .flex_1()
            .min_w_0()
            .p(px(12.0))
            .rounded(px(layout::BORDER_RADIUS))
            .border_1()
            .cursor_pointer()
            .when(is_selected, |el| {
                el.border_color(rgb(colors.accent)).bg(rgba(colors.selection))
            })
            .when(!is_selected, |el| {
                el.border_color(rgb(colors.border_subtle))
                    .bg(rgb(colors.surface))
                    .hover(|s| s.bg(rgb(colors.surface_elevated)))
            })
            .on_click(cx.listener(move |this, _, cx| {
                this.select_topic(topic_id, cx);
            }))
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap(px(8.0))
                    .child(
                        svg_icon(topic_icon(topic.icon()), IconSize::Large)
                            .text_color(rgb(colors.text_primary)),
                    )
                    .child(
                        div()
                            .min_w_0()
                            .flex()
                            .flex_col()
                            .child(
                                div()
                                    .text_sm()
                                    .font_weight(FontWeight::MEDIUM)
                                    .text_color(rgb(colors.text_primary))
                                    .whitespace_nowrap()
                                    .text_ellipsis()
                                    .overflow_hidden()
                                    .child(topic.title()),
                            )
                            .child(
                                div()
                                    .text_xs()
                                    .text_color(rgb(colors.text_secondary))
                                    .whitespace_nowrap()
                                    .text_ellipsis()
                                    .overflow_hidden()
                                    .child(topic.description()),
                            ),
                    ),
            )
    }

    // ========================================================================
    // Composer
    // ========================================================================

    fn render_composer(&self, cx: &mut ViewContext<Self>) -> impl IntoElement {
        let colors = &self.theme.colors;

        div()
            .id("composer")
            .w_full()
            .flex_shrink_0()
            .p(px(16.0))
            .flex()
            .items_center()
            .gap(px(12.0))
            .border_t_1()
            .border_color(rgb(colors.border))
            // Enter sends; shift-enter is reserved for future multi-line input
            .on_key_down(cx.listener(|this, event: &KeyDownEvent, cx| {
                if event.keystroke.key == "enter" && !event.keystroke.modifiers.shift {
                    this.handle_send(cx);
                }
            }))
            .child(
                div()
                    .id("composer-input")
                    .flex_1()
                    .min_w_0()
                    .h(px(40.0))
                    .px(px(12.0))
                    .flex()
                    .items_center()
                    .rounded(px(layout::BORDER_RADIUS))
                    .bg(rgb(colors.input_bg))
                    .border_1()
                    .border_color(rgb(colors.border_subtle))
                    .on_mouse_down(
                        MouseButton::Left,
                        cx.listener(|this, _, cx| {
                            let handle = this.message_input.read(cx).focus_handle(cx);
                            cx.focus(&handle);
                        }),
                    )
                    .child(self.message_input.clone()),
            )
            .child(self.render_send_button(cx))
    }

    fn render_send_button(&self, cx: &mut ViewContext<Self>) -> impl IntoElement {
        let colors = &self.theme.colors;
        let has_text = !self.message_input.read(cx).content().trim().is_empty();

        div()
            .id("send-button")
            .w(px(40.0))
            .h(px(40.0))
            .flex_shrink_0()
            .flex()
            .items_center()
            .justify_center()
            .rounded(px(layout::BORDER_RADIUS))
            .when(has_text, |el| {
                el.bg(rgb(colors.primary))
                    .cursor_pointer()
                    .hover(|s| s.bg(rgb(colors.primary_hover)))
            })
            .when(!has_text, |el| el.bg(rgb(colors.surface)).cursor_default())
            .on_click(cx.listener(|this, _, cx| {
                this.handle_send(cx);
            }))
            .child(svg_icon(IconName::Send, IconSize::Small).text_color(if has_text {
                rgb(colors.text_on_primary)
            } else {
                rgb(colors.text_secondary)
            }))
    }
}

// ============================================================================
// Render Implementation
// ============================================================================

impl FocusableView for FeinChatWindow {
    fn focus_handle(&self, _cx: &AppContext) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for FeinChatWindow {
    fn render(&mut self, cx: &mut ViewContext<Self>) -> impl IntoElement {
        let colors = self.theme.colors.clone();

        div()
            .id("feinchat-window")
            .key_context("FeinChatWindow")
            .track_focus(&self.focus_handle)
            .size_full()
            .flex()
            .flex_row()
            .overflow_hidden()
            .bg(rgb(colors.panel_bg))
            .text_size(px(self.theme.typography.base_size))
            .text_color(rgb(colors.text_primary))
            .child(self.render_sidebar())
            .child(self.render_main_panel(cx))
    }
}

// ============================================================================
// Color Helpers
// ============================================================================

fn rgb(c: feinchat_ui::Rgba) -> Rgba {
    Rgba {
        r: c.r,
        g: c.g,
        b: c.b,
        a: 1.0,
    }
}

fn rgba(c: feinchat_ui::Rgba) -> Rgba {
    Rgba {
        r: c.r,
        g: c.g,
        b: c.b,
        a: c.a,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_carousel_pages_cover_the_catalog() {
        assert_eq!(topic_page_count(), 2);

        let first: Vec<Topic> = topics_on_page(0).to_vec();
        let second: Vec<Topic> = topics_on_page(1).to_vec();
        assert_eq!(first.len(), 3);
        assert_eq!(second.len(), 3);

        let mut all: Vec<Topic> = first;
        all.extend(second);
        assert_eq!(all, Topic::ALL.to_vec());
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        assert!(topics_on_page(2).is_empty());
        assert!(topics_on_page(99).is_empty());
    }
}
