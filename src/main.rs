// SPDX-License-Identifier: MPL-2.0
use iced_toast::app::{App, Flags, WINDOW_DEFAULT_HEIGHT, WINDOW_DEFAULT_WIDTH};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        theme: args.opt_value_from_str("--theme").unwrap(),
    };

    iced::application(move || App::boot(flags.clone()), App::update, App::view)
        .title(App::title)
        .subscription(App::subscription)
        .theme(App::theme)
        .window_size((WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT))
        .run()
}
