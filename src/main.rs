use foliant::{Book, BookError, RenderNode};
use std::env;
use std::fs;

/// A simple CLI to inspect a book configuration: parses the JSON and
/// prints the resolved per-page summary.
fn main() -> Result<(), BookError> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Inspect a flipbook configuration.");
        eprintln!();
        eprintln!("Usage: {} <path/to/book.json>", args[0]);
        std::process::exit(1);
    }

    let config_path = &args[1];
    let config_json = fs::read_to_string(config_path)?;
    let book = Book::from_json(&config_json)?;

    if let Some(title) = &book.config().title {
        println!("{}", title);
    }
    println!("{} pages", book.page_count());

    for page in book.pages() {
        let background = page.style.background.as_deref().unwrap_or("transparent");
        println!(
            "  page {:>3} [{:?}/{:?}] bg {} ({} nodes{})",
            page.number,
            page.kind,
            page.density,
            background,
            page.nodes.len(),
            placeholder_suffix(&page.nodes),
        );
    }

    Ok(())
}

fn placeholder_suffix(nodes: &[RenderNode]) -> String {
    let placeholders = nodes
        .iter()
        .filter(|n| matches!(n, RenderNode::Placeholder { .. }))
        .count();
    if placeholders > 0 {
        format!(", {} placeholder(s)", placeholders)
    } else {
        String::new()
    }
}
