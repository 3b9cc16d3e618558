use std::env;
use std::fs::File;

use adminkit::{AdminPanel, BannerRole, ConfigError, PanelConfig};
use pagedom::{Dom, DomError, Element, Page};
use simplelog::{Config, LevelFilter, WriteLogger};
use thiserror::Error;

#[derive(Debug, Error)]
enum DemoError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Dom(#[from] DomError),
}

fn sample_page(config: &PanelConfig) -> Element {
    let banner = |role: BannerRole| {
        Element::html("")
            .id(config.banner_id(role))
            .class(format!("banner-{role}"))
            .hidden()
    };
    let title = |id: &str, label: &str| {
        Element::html(label)
            .id(id)
            .class(config.menu_title_class.as_str())
    };

    Element::col()
        .id("page")
        .child(
            Element::col()
                .id(config.menu_bar_id.as_str())
                .child(title("users-title", "Users").class(config.expanded_class.as_str()))
                .child(
                    Element::col()
                        .id("users-items")
                        .height(2)
                        .child(Element::html("List users").id("users-list"))
                        .child(Element::html("Invite").id("users-invite")),
                )
                .child(title("settings-title", "Settings"))
                .child(
                    Element::col()
                        .id("settings-items")
                        .height(1)
                        .child(Element::html("General").id("settings-general")),
                ),
        )
        .child(banner(BannerRole::Info))
        .child(banner(BannerRole::Warning))
        .child(banner(BannerRole::Error))
}

fn print_step(panel: &AdminPanel<Page>, step: &str) {
    println!("== {step}");
    print!("{}", panel.dom().outline());
    let fragment = panel.dom().fragment();
    if !fragment.is_empty() {
        println!("(location #{fragment})");
    }
    println!();
}

async fn run(config_path: Option<String>) -> Result<(), DemoError> {
    let config = match config_path {
        Some(path) => PanelConfig::load(path)?,
        None => PanelConfig::default(),
    };
    let slide = config.slide().duration;

    let mut panel = AdminPanel::new(Page::new(sample_page(&config)), config)?;
    panel.init_menus()?;
    print_step(&panel, "page loaded");

    let toggled = panel.toggle_menu("users-title", false)?;
    panel.dom_mut().advance(slide / 2);
    print_step(&panel, "collapsing users, halfway");

    panel.dom_mut().advance(slide);
    if let Some(handle) = toggled.slide {
        println!("slide {:?}", handle.await);
    }
    print_step(&panel, "users collapsed");

    panel.toggle_menu("settings-title", true)?;
    print_step(&panel, "settings expanded without animation");

    panel.set_info("Saved <b>3</b> users.", false)?;
    panel.set_error("Could not reach the mail server.", true)?;
    print_step(&panel, "info and error banners");

    panel.set_error("Mail server still unreachable.", true)?;
    println!(
        "error banner focused again: {} scroll(s)",
        panel.dom().focus_state().scrolls()
    );

    panel.clear_banners()?;
    print_step(&panel, "banners cleared");
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let log_file = File::create("panel-demo.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    if let Err(e) = run(env::args().nth(1)).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
