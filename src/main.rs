//! Doc Search - Binary Entry Point
//!
//! Interactive search over a directory of generated documentation
//! indexes: each input line is a query, `open N` resolves result N to its
//! navigation URL, `quit` exits.

use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use doc_search::{
    NavigationTarget, PlainRenderer, ResultEntry, SearchComponent, SearchConfig, SearchField,
    SearchResult,
};

fn main() -> SearchResult<()> {
    env_logger::init();

    let dir = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    let mut config = SearchConfig::new();
    if let Ok(root) = env::var("DOC_SEARCH_ROOT") {
        config.root_path = root;
    }
    if let Ok(frame) = env::var("DOC_SEARCH_FRAME") {
        config.frame_target = Some(frame);
    }

    let component = SearchComponent::from_directory(config, &dir)?;
    let stats = component.stats();
    println!(
        "Indexed {} items: {} modules, {} packages, {} types, {} members, {} tags",
        stats.total(),
        stats.modules,
        stats.packages,
        stats.types,
        stats.members,
        stats.tags
    );

    let mut field = SearchField::new();
    field.activate();

    let stdin = io::stdin();
    let mut last_results: Vec<ResultEntry> = Vec::new();

    print_prompt(&field)?;
    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();

        if input == "quit" || input == "exit" {
            break;
        }

        if input.is_empty() {
            // Reset control, then the field loses focus until the next line
            field.reset();
            field.blur();
            last_results.clear();
            print_prompt(&field)?;
            continue;
        }

        if let Some(selection) = input.strip_prefix("open ") {
            navigate(&component, &last_results, selection.trim());
            print_prompt(&field)?;
            continue;
        }

        field.focus();
        field.begin_input();
        field.set_value(input);

        let entries = component.query(field.value())?;
        let mut renderer = PlainRenderer::new();
        component.render(field.value(), &entries, &mut renderer)?;
        for rendered in renderer.lines() {
            println!("{}", rendered);
        }

        last_results = entries;
        print_prompt(&field)?;
    }

    Ok(())
}

/// Resolve and print the navigation for one numbered result
fn navigate(component: &SearchComponent, results: &[ResultEntry], selection: &str) {
    let index = match selection.parse::<usize>() {
        Ok(n) if n >= 1 => n - 1,
        _ => {
            println!("usage: open <result number>");
            return;
        }
    };

    match results.get(index).and_then(|entry| component.resolve(entry)) {
        Some(nav) => match nav.target {
            NavigationTarget::TopWindow => println!("-> {}", nav.href),
            NavigationTarget::Frame(name) => println!("-> {} (frame {})", nav.href, name),
        },
        None => println!("nothing to open"),
    }
}

fn print_prompt(field: &SearchField) -> io::Result<()> {
    print!("[{}] ", field.display_text());
    io::stdout().flush()
}
