//! Minimal single-line text input
//!
//! Holds the staged draft text for the composer. Observers are notified on
//! every edit via entity notify, so the window can mirror the content into
//! session state. Enter is deliberately not consumed here; it bubbles up to
//! the composer's send handler.

use gpui::prelude::FluentBuilder;
use gpui::*;
use unicode_segmentation::UnicodeSegmentation;

pub struct TextInput {
    content: String,
    placeholder: SharedString,
    focus_handle: FocusHandle,
}

impl TextInput {
    pub fn new(cx: &mut ViewContext<Self>) -> Self {
        Self {
            content: String::new(),
            placeholder: SharedString::default(),
            focus_handle: cx.focus_handle(),
        }
    }

    pub fn set_placeholder(&mut self, text: impl Into<SharedString>) {
        self.placeholder = text.into();
    }

    /// Current text content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Replace the content wholesale (used when a topic prefills the draft).
    pub fn set_content(&mut self, text: impl Into<String>, cx: &mut ViewContext<Self>) {
        self.content = text.into();
        cx.notify();
    }

    pub fn clear(&mut self, cx: &mut ViewContext<Self>) {
        self.content.clear();
        cx.notify();
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    fn handle_key_down(&mut self, event: &KeyDownEvent, cx: &mut ViewContext<Self>) {
        let keystroke = &event.keystroke;
        let mods = &keystroke.modifiers;
        if mods.control || mods.platform || mods.alt || mods.function {
            return;
        }

        let key = keystroke.key.as_str();
        match key {
            "backspace" => {
                // Remove the last grapheme, not the last byte.
                if let Some((offset, _)) = self.content.grapheme_indices(true).next_back() {
                    self.content.truncate(offset);
                    cx.notify();
                }
            }
            "space" => {
                self.content.push(' ');
                cx.notify();
            }
            // Send/focus keys bubble to the composer.
            "enter" | "escape" | "tab" | "up" | "down" | "left" | "right" | "home" | "end"
            | "delete" | "pageup" | "pagedown" => {}
            // Regular character keys carry their own text.
            text if text.chars().count() == 1 => {
                if mods.shift {
                    self.content.extend(text.chars().flat_map(char::to_uppercase));
                } else {
                    self.content.push_str(text);
                }
                cx.notify();
            }
            _ => {}
        }
    }
}

impl FocusableView for TextInput {
    fn focus_handle(&self, _cx: &AppContext) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for TextInput {
    fn render(&mut self, cx: &mut ViewContext<Self>) -> impl IntoElement {
        let focused = self.focus_handle.is_focused(cx);
        let show_placeholder = self.content.is_empty();
        let text: SharedString = if show_placeholder {
            self.placeholder.clone()
        } else {
            self.content.clone().into()
        };

        div()
            .id("text-input")
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(|this, event: &KeyDownEvent, cx| {
                this.handle_key_down(event, cx);
            }))
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(|this, _, cx| {
                    cx.focus(&this.focus_handle);
                }),
            )
            .w_full()
            .cursor(CursorStyle::IBeam)
            .flex()
            .items_center()
            .overflow_hidden()
            .child(
                div()
                    .text_sm()
                    .whitespace_nowrap()
                    .when(show_placeholder, |el| el.text_color(rgb(0x6b7280)))
                    .child(text),
            )
            // Caret bar; static, no blink.
            .when(focused, |el| {
                el.child(div().w(px(1.5)).h(px(16.0)).flex_shrink_0().bg(white()))
            })
    }
}
