//! End-to-end scenarios driving the adapter the way a hosting renderer
//! would: declare, attach, query, mutate, and observe change notices.

use std::cell::RefCell;
use std::rc::Rc;

use rowkind_adapter::{
    AdapterError, LayoutId, LayoutStrategy, ListRenderer, MultiTypeAdapter, RegistryOptions,
    SegmentRegistry, SegmentSpec, SingleListSpec,
};

#[derive(Clone, Debug, PartialEq, Eq)]
struct Row {
    template: LayoutId,
    text: String,
}

#[derive(Clone, Debug, PartialEq)]
struct Article {
    title: String,
    score: u32,
}

#[derive(Default)]
struct RecordingRenderer {
    events: Rc<RefCell<Vec<String>>>,
}

impl ListRenderer for RecordingRenderer {
    fn attached(&mut self, strategy: LayoutStrategy, total: usize) {
        self.events
            .borrow_mut()
            .push(format!("attached {strategy:?} total={total}"));
    }

    fn items_changed(&mut self, from: usize, to: usize) {
        self.events.borrow_mut().push(format!("changed {from}..{to}"));
    }

    fn items_inserted(&mut self, at: usize, count: usize) {
        self.events
            .borrow_mut()
            .push(format!("inserted {count} at {at}"));
    }

    fn items_removed(&mut self, at: usize, count: usize) {
        self.events
            .borrow_mut()
            .push(format!("removed {count} at {at}"));
    }
}

const HEADER: LayoutId = LayoutId(1);
const ARTICLE: LayoutId = LayoutId(2);

fn feed_registry() -> SegmentRegistry<Row> {
    let mut registry = SegmentRegistry::new();
    registry.declare(
        Some("headers"),
        SegmentSpec::bind(|title: &String, _| Row {
            template: HEADER,
            text: title.clone(),
        })
        .items(vec!["Top stories".to_owned()])
        .layout(HEADER),
    );
    registry.declare(
        Some("articles"),
        SegmentSpec::bind(|article: &Article, local| Row {
            template: ARTICLE,
            text: format!("{local}: {} ({})", article.title, article.score),
        })
        .items(vec![
            Article {
                title: "Borrowed views".to_owned(),
                score: 41,
            },
            Article {
                title: "Flat maps".to_owned(),
                score: 17,
            },
        ])
        .layout(ARTICLE),
    );
    registry
}

#[test]
fn full_scenario_declare_attach_query_mutate() {
    let renderer = RecordingRenderer::default();
    let events = Rc::clone(&renderer.events);

    let mut adapter = MultiTypeAdapter::attach(feed_registry(), Box::new(renderer)).unwrap();
    assert_eq!(
        events.borrow().as_slice(),
        ["attached VerticalList total=3".to_owned()]
    );

    // Pull every position the way a renderer binds visible rows.
    let rows: Vec<Row> = (0..adapter.total_count())
        .map(|position| adapter.item_at(position).unwrap())
        .collect();
    assert_eq!(rows[0].template, HEADER);
    assert_eq!(rows[1].text, "0: Borrowed views (41)");
    assert_eq!(rows[2].text, "1: Flat maps (17)");

    events.borrow_mut().clear();
    adapter.update(|registry| {
        let mut articles = registry.edit_by_tag::<Article>("articles").unwrap();
        articles.push(Article {
            title: "Guard drops".to_owned(),
            score: 3,
        });
    });

    assert_eq!(adapter.total_count(), 4);
    assert_eq!(adapter.item_at(3).unwrap().text, "2: Guard drops (3)");
    assert_eq!(
        events.borrow().as_slice(),
        ["changed 0..3".to_owned(), "inserted 1 at 3".to_owned()]
    );
}

#[test]
fn empty_segment_keeps_placeholder_slot() {
    let mut registry = feed_registry();
    registry.declare(
        Some("footers"),
        SegmentSpec::bind(|note: &String, _| Row {
            template: HEADER,
            text: note.clone(),
        })
        .layout(HEADER),
    );

    let adapter = MultiTypeAdapter::attach(registry, Box::new(RecordingRenderer::default()))
        .unwrap();

    // Three items plus one reserved slot for the empty footer segment.
    assert_eq!(adapter.total_count(), 4);
    assert_eq!(adapter.template_at(3).unwrap(), HEADER);
    assert_eq!(
        adapter.item_at(3).unwrap_err(),
        AdapterError::PositionOutOfRange { position: 3, len: 4 }
    );
    // The flattened items do not include the placeholder.
    assert_eq!(adapter.registry().all_items().unwrap().len(), 3);
}

#[test]
fn empty_segments_can_be_collapsed_by_configuration() {
    let mut registry: SegmentRegistry<Row> = SegmentRegistry::with_options(
        RegistryOptions::new().reserve_slot_for_empty_segments(false),
    );
    registry.declare(
        Some("headers"),
        SegmentSpec::bind(|title: &String, _| Row {
            template: HEADER,
            text: title.clone(),
        })
        .items(vec!["Only".to_owned()])
        .layout(HEADER),
    );
    registry.declare(
        Some("articles"),
        SegmentSpec::bind(|article: &Article, _| Row {
            template: ARTICLE,
            text: article.title.clone(),
        })
        .layout(ARTICLE),
    );

    let adapter =
        MultiTypeAdapter::attach(registry, Box::new(RecordingRenderer::default())).unwrap();

    assert_eq!(adapter.total_count(), 1);
    assert_eq!(
        adapter.item_at(1).unwrap_err(),
        AdapterError::PositionOutOfRange { position: 1, len: 1 }
    );
}

#[test]
fn single_configuration_round_trip() {
    let renderer = RecordingRenderer::default();
    let events = Rc::clone(&renderer.events);

    let spec = SingleListSpec::bind(|name: &String, local| Row {
        template: ARTICLE,
        text: format!("{local}:{name}"),
    })
    .items(vec!["ada".to_owned(), "grace".to_owned()])
    .layout(ARTICLE)
    .strategy(LayoutStrategy::Grid { columns: 2 });

    let adapter = MultiTypeAdapter::from_single(spec, Box::new(renderer)).unwrap();

    assert_eq!(adapter.total_count(), 2);
    assert_eq!(adapter.item_at(0).unwrap().text, "0:ada");
    assert_eq!(
        events.borrow().as_slice(),
        ["attached Grid { columns: 2 } total=2".to_owned()]
    );
}

#[test]
fn type_directed_edit_reaches_the_right_segment() {
    let mut adapter =
        MultiTypeAdapter::attach(feed_registry(), Box::new(RecordingRenderer::default()))
            .unwrap();

    adapter.update(|registry| {
        // Only the article segment holds `Article` items.
        let mut articles = registry.items_of_mut::<Article>().unwrap();
        articles.retain(|article| article.score > 20);
    });

    assert_eq!(adapter.total_count(), 2);
    assert_eq!(adapter.item_at(1).unwrap().text, "0: Borrowed views (41)");
}
