//! Feed demo: section headers and articles behind one flat list.
//!
//! Stands in for a real list widget: the console renderer pulls every
//! position from the adapter, prints it, and logs the change notices it
//! receives after each update.

use anyhow::Result;
use rowkind_adapter::{ListRenderer, MultiTypeAdapter};
use rowkind_core::{LayoutId, SegmentSpec};

const HEADER_LAYOUT: LayoutId = LayoutId(1);
const ARTICLE_LAYOUT: LayoutId = LayoutId(2);

struct Article {
    title: String,
    score: u32,
}

/// Render instruction the console renderer consumes: the template to
/// inflate and one line of text.
struct Line {
    template: LayoutId,
    text: String,
}

struct ConsoleRenderer;

impl ListRenderer for ConsoleRenderer {
    fn items_changed(&mut self, from: usize, to: usize) {
        println!("-- renderer: changed [{from}, {to})");
    }

    fn items_inserted(&mut self, at: usize, count: usize) {
        println!("-- renderer: {count} inserted at {at}");
    }

    fn items_removed(&mut self, at: usize, count: usize) {
        println!("-- renderer: {count} removed at {at}");
    }
}

fn article(title: &str, score: u32) -> Article {
    Article {
        title: title.to_owned(),
        score,
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let mut adapter = MultiTypeAdapter::set_up(Box::new(ConsoleRenderer), |registry| {
        registry.declare(
            Some("headers"),
            SegmentSpec::bind(|title: &String, _| Line {
                template: HEADER_LAYOUT,
                text: title.clone(),
            })
            .items(vec!["Top stories".to_owned()])
            .layout(HEADER_LAYOUT),
        );
        registry.declare(
            Some("articles"),
            SegmentSpec::bind(|article: &Article, local| Line {
                template: ARTICLE_LAYOUT,
                text: format!("{}. {} ({})", local + 1, article.title, article.score),
            })
            .items(vec![
                article("Flat position indexing in 200 lines", 120),
                article("Type-erased storage without the guesswork", 87),
            ])
            .layout(ARTICLE_LAYOUT),
        );
    })?;

    log::info!("adapter ready with {} flat positions", adapter.total_count());
    render(&adapter)?;

    println!("\npushing one more article...\n");
    adapter.update(|registry| {
        registry
            .edit_by_tag::<Article>("articles")
            .expect("articles segment was declared above")
            .push(article("Scoped guards that recompute for you", 64));
    });

    render(&adapter)
}

fn render(adapter: &MultiTypeAdapter<Line>) -> Result<()> {
    for position in 0..adapter.total_count() {
        let line = adapter.item_at(position)?;
        println!("{position:>2} [layout {}] {}", line.template.0, line.text);
    }
    Ok(())
}
