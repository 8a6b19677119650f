//! Binds the reader controller to the host page.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Function;
use sieve_reader_core::render::{self, direction_toggle_label, sort_button_label};
use sieve_reader_core::url_state::location_target;
use sieve_reader_core::{
    ArticleSource, Axiom, Debounce, Frame, Reader, ReaderConfig, ReaderEvent, SortField,
};
use tracing::{debug, error, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlInputElement, HtmlSelectElement};

use crate::dom;
use crate::fetch::FetchSource;

/// Host page elements, resolved once at startup. Only the list is required.
pub struct Elements {
    list: Element,
    status: Option<Element>,
    pagination: Option<Element>,
    source: Option<HtmlSelectElement>,
    topic: Option<HtmlSelectElement>,
    topic_label: Option<Element>,
    search: Option<HtmlInputElement>,
    sort_buttons: Vec<(SortField, Element)>,
    sort_field: Option<HtmlSelectElement>,
    sort_direction: Option<Element>,
    axiom_filter: Option<Element>,
}

impl Elements {
    pub fn resolve(document: &Document, config: &ReaderConfig) -> Result<Self, JsValue> {
        let ids = &config.elements;
        let list = document
            .get_element_by_id(&ids.list)
            .ok_or_else(|| JsValue::from_str(&format!("missing #{}", ids.list)))?;

        let sort_buttons = match document.get_element_by_id(&ids.sort_buttons) {
            Some(container) => dom::select_all(&container, "button[data-sort]")?
                .into_iter()
                .filter_map(|button| {
                    let field = SortField::from_key(&button.get_attribute("data-sort")?)?;
                    Some((field, button))
                })
                .collect(),
            None => Vec::new(),
        };

        Ok(Self {
            list,
            status: document.get_element_by_id(&ids.status),
            pagination: document.get_element_by_id(&ids.pagination),
            source: dom::by_id(document, &ids.source_filter),
            topic: dom::by_id(document, &ids.topic_filter),
            topic_label: document.get_element_by_id(&ids.topic_filter_label),
            search: dom::by_id(document, &ids.search),
            sort_buttons,
            sort_field: dom::by_id(document, &ids.sort_field),
            sort_direction: document.get_element_by_id(&ids.sort_direction),
            axiom_filter: document.get_element_by_id(&ids.axiom_filter),
        })
    }
}

/// Load the collection, then hand control to an [`App`]. A failed load
/// leaves the placeholder in the list and binds nothing.
pub async fn run(config: ReaderConfig, elements: Elements) {
    let source = FetchSource::new(config.data_url.clone());
    match source.load().await {
        Ok(document) => {
            let app = App::new(Reader::new(document, config), elements);
            if let Err(err) = app.start() {
                error!(?err, "reader failed to start");
            }
        }
        Err(err) => {
            warn!(source = %source.describe(), error = %err, "failed to load articles");
            elements.list.set_inner_html(render::LOAD_FAILURE_HTML);
        }
    }
}

pub struct App {
    reader: RefCell<Reader>,
    elements: Elements,
    search: RefCell<Debounce<i32, String>>,
    search_timer: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl App {
    pub fn new(reader: Reader, elements: Elements) -> Rc<Self> {
        let search = Debounce::from_millis(reader.config().search_debounce_ms);
        Rc::new(Self {
            reader: RefCell::new(reader),
            elements,
            search: RefCell::new(search),
            search_timer: RefCell::new(None),
        })
    }

    /// Restore state from the location, draw it and start listening.
    pub fn start(self: &Rc<Self>) -> Result<(), JsValue> {
        let query = dom::window()?.location().search()?;
        let frame = self.reader.borrow_mut().hydrate(&query);

        self.populate_controls();
        self.apply(&frame)?;
        self.sync_sort_controls();
        self.bind()
    }

    fn populate_controls(&self) {
        let reader = self.reader.borrow();
        let state = reader.state();
        let options = reader.options();

        if let Some(source) = &self.elements.source {
            if let Err(err) = source.insert_adjacent_html(
                "beforeend",
                &render::render_source_options(options, state.filter.source()),
            ) {
                warn!(?err, "could not add source options");
            }
            source.set_value(state.filter.source().unwrap_or(""));
        }

        if options.topic_control_visible() {
            if let Some(topic) = &self.elements.topic {
                if let Err(err) = topic.insert_adjacent_html(
                    "beforeend",
                    &render::render_topic_options(options, state.filter.topic()),
                ) {
                    warn!(?err, "could not add topic options");
                }
                topic.set_value(state.filter.topic().unwrap_or(""));
            }
        } else if let Some(label) = &self.elements.topic_label {
            if let Err(err) = label.class_list().add_1("hidden") {
                warn!(?err, "could not hide topic filter");
            }
        }

        if let Some(search) = &self.elements.search {
            search.set_value(&state.filter.search);
        }

        if let Some(sort_field) = &self.elements.sort_field {
            sort_field.set_inner_html(&render::render_sort_field_options(
                reader.config().axiom_sort,
                &state.sort,
            ));
        }

        if let Some(axioms) = &self.elements.axiom_filter {
            axioms.set_inner_html(&render::render_axiom_checkboxes(&state.filter.axioms));
        }
    }

    fn sync_sort_controls(&self) {
        let reader = self.reader.borrow();
        let sort = reader.state().sort;

        for (field, button) in &self.elements.sort_buttons {
            button.set_text_content(Some(&sort_button_label(*field, &sort)));
            if let Err(err) = button.class_list().toggle_with_force("active", *field == sort.field) {
                warn!(?err, field = field.key(), "could not mark sort button");
            }
        }
        if let Some(select) = &self.elements.sort_field {
            select.set_value(sort.field.key());
        }
        if let Some(toggle) = &self.elements.sort_direction {
            toggle.set_text_content(Some(&direction_toggle_label(sort.direction)));
        }
    }

    fn apply(&self, frame: &Frame) -> Result<(), JsValue> {
        if let Some(status) = &self.elements.status {
            status.set_text_content(Some(&frame.status));
        }
        self.elements.list.set_inner_html(&frame.list_html);
        if let Some(pagination) = &self.elements.pagination {
            pagination.set_inner_html(&frame.pagination_html);
        }

        let window = dom::window()?;
        let path = window.location().pathname()?;
        window.history()?.replace_state_with_url(
            &JsValue::NULL,
            "",
            Some(&location_target(&path, &frame.query)),
        )?;

        if frame.scroll_to_top {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
        Ok(())
    }

    fn dispatch(&self, event: ReaderEvent) {
        let frame = self.reader.borrow_mut().dispatch(event);
        let Some(frame) = frame else {
            return;
        };
        if let Err(err) = self.apply(&frame) {
            warn!(?err, "failed to update page");
        }
        self.sync_sort_controls();
    }

    fn bind(self: &Rc<Self>) -> Result<(), JsValue> {
        if let Some(source) = &self.elements.source {
            let app = Rc::clone(self);
            let select = source.clone();
            listen(source, "change", move |_| {
                app.dispatch(ReaderEvent::SourceSelected(select.value()))
            })?;
        }

        if let Some(topic) = &self.elements.topic {
            let app = Rc::clone(self);
            let select = topic.clone();
            listen(topic, "change", move |_| {
                app.dispatch(ReaderEvent::TopicSelected(select.value()))
            })?;
        }

        if let Some(search) = &self.elements.search {
            let weak = Rc::downgrade(self);
            *self.search_timer.borrow_mut() = Some(Closure::new(move || {
                if let Some(app) = weak.upgrade() {
                    app.on_search_quiet();
                }
            }));

            let app = Rc::clone(self);
            let input = search.clone();
            listen(search, "input", move |_| {
                if let Err(err) = app.on_search_input(input.value()) {
                    warn!(?err, "failed to schedule search");
                }
            })?;
        }

        for (field, button) in &self.elements.sort_buttons {
            let app = Rc::clone(self);
            let field = *field;
            listen(button, "click", move |_| {
                app.dispatch(ReaderEvent::SortClicked(field))
            })?;
        }

        if let Some(sort_field) = &self.elements.sort_field {
            let app = Rc::clone(self);
            let select = sort_field.clone();
            listen(sort_field, "change", move |_| {
                match SortField::from_key(&select.value()) {
                    Some(field) => app.dispatch(ReaderEvent::SortFieldSelected(field)),
                    None => debug!(value = %select.value(), "unknown sort field selected"),
                }
            })?;
        }

        if let Some(toggle) = &self.elements.sort_direction {
            let app = Rc::clone(self);
            listen(toggle, "click", move |_| {
                app.dispatch(ReaderEvent::DirectionToggled)
            })?;
        }

        if let Some(axioms) = &self.elements.axiom_filter {
            let app = Rc::clone(self);
            listen(axioms, "change", move |event| {
                let Some(input) = event
                    .target()
                    .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
                else {
                    return;
                };
                if let Some(axiom) = Axiom::from_key(&input.value()) {
                    app.dispatch(ReaderEvent::AxiomToggled {
                        axiom,
                        checked: input.checked(),
                    });
                }
            })?;
        }

        if let Some(pagination) = &self.elements.pagination {
            let app = Rc::clone(self);
            listen(pagination, "click", move |event| {
                if let Some(page) = requested_page(&event) {
                    app.dispatch(ReaderEvent::PageRequested(page));
                }
            })?;
        }

        listen(&self.elements.list, "click", move |event| {
            toggle_detail(&event);
        })?;

        Ok(())
    }

    fn on_search_input(&self, value: String) -> Result<(), JsValue> {
        let timer = self.search_timer.borrow();
        let Some(callback) = timer.as_ref() else {
            return Ok(());
        };

        let window = dom::window()?;
        let quiet_ms =
            i32::try_from(self.search.borrow().quiet_period().as_millis()).unwrap_or(i32::MAX);
        let handle = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref::<Function>(),
            quiet_ms,
        )?;

        if let Some(previous) = self.search.borrow_mut().arm(handle, value) {
            window.clear_timeout_with_handle(previous);
        }
        Ok(())
    }

    fn on_search_quiet(&self) {
        let value = self.search.borrow_mut().fire();
        if let Some(value) = value {
            self.dispatch(ReaderEvent::SearchChanged(value));
        }
    }
}

fn listen<F>(target: &EventTarget, kind: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref::<Function>())?;
    closure.forget();
    Ok(())
}

fn requested_page(event: &Event) -> Option<usize> {
    let button = dom::event_element(event)?
        .closest("button[data-page]")
        .ok()
        .flatten()?;
    button.get_attribute("data-page")?.parse().ok()
}

/// Open or close the detail panel of the item whose toggle was clicked.
fn toggle_detail(event: &Event) -> Option<()> {
    let toggle = dom::event_element(event)?
        .closest(r#"[data-toggle="detail"]"#)
        .ok()
        .flatten()?;
    event.prevent_default();

    let item = toggle.closest(".article-item").ok().flatten()?;
    let detail = item.query_selector(".article-detail").ok().flatten()?;
    detail.class_list().toggle("open").ok()?;
    Some(())
}
