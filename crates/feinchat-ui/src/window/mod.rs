mod feinchat_window;

pub use feinchat_window::FeinChatWindow;
