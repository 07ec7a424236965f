// Logging helpers shared by the views

pub fn clog(msg: &str) {
    gloo::console::log!(msg);
}

pub fn cwarn(msg: &str) {
    gloo::console::warn!(msg);
}
