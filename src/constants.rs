// Host document integration for the web front-end.

// Element the page mounts into; `<body>` is used when it is missing
pub const ROOT_ID: &str = "app";

// Added to `<body>` while any dialog is open (scroll lock)
pub const BODY_DIALOG_OPEN_CLASS: &str = "dialog-open";

pub const LOG_LEVEL: log::Level = log::Level::Info;
