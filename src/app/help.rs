use crate::app::App;

impl App {
    pub fn close_help(&mut self) {
        self.show_help = false;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }
}
