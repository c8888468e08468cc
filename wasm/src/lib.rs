//! WebAssembly module for the TasteMongers site
//!
//! Provides client-side state for:
//! - The ratings catalog (filters, sort, detail navigation)
//! - The newsletter signup popup
//! - Small display helpers (stars, offer pricing, sort options)

use rust_decimal::Decimal;
use std::str::FromStr;
use wasm_bindgen::prelude::*;

use shared::catalog::{self, FilterState, NavigateDirection, SortSelection};
use shared::newsletter::{self, GatewayError, SubscribeState};
use shared::Rating;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::log_1(&JsValue::from_str("TasteMongers WASM ready"));
}

/// Log to the browser console and wrap the message for JavaScript
fn js_error(message: String) -> JsValue {
    web_sys::console::error_1(&JsValue::from_str(&message));
    JsValue::from_str(&message)
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization failed: {}", e))
}

/// Catalog page state exposed to JavaScript
#[wasm_bindgen(js_name = CatalogSession)]
pub struct CatalogPage {
    inner: catalog::CatalogSession,
}

impl Default for CatalogPage {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen(js_class = CatalogSession)]
impl CatalogPage {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: catalog::CatalogSession::new(),
        }
    }

    /// Load the body of `GET /api/ratings`
    #[wasm_bindgen(js_name = loadRatings)]
    pub fn load_ratings(&mut self, json: &str) -> Result<(), JsValue> {
        self.try_load_ratings(json).map_err(js_error)
    }

    /// Record a failed ratings fetch
    #[wasm_bindgen(js_name = failLoad)]
    pub fn fail_load(&mut self, reason: &str) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("Ratings fetch failed: {}", reason)));
        self.inner.finish_load(Err(reason.to_string()));
    }

    #[wasm_bindgen(js_name = isLoading)]
    pub fn is_loading(&self) -> bool {
        self.inner.is_loading()
    }

    #[wasm_bindgen(js_name = loadError)]
    pub fn load_error(&self) -> Option<String> {
        self.inner.load_error().map(str::to_string)
    }

    /// Replace the filters with a camelCase filter object
    #[wasm_bindgen(js_name = setFilters)]
    pub fn set_filters(&mut self, json: &str) -> Result<(), JsValue> {
        self.try_set_filters(json).map_err(js_error)
    }

    /// Select a sort key such as `overall_rating_desc`; an empty or
    /// unknown key clears the sort
    #[wasm_bindgen(js_name = setSort)]
    pub fn set_sort(&mut self, key: Option<String>) {
        let sort = key.as_deref().map(str::trim).and_then(SortSelection::parse);
        self.inner.set_sort(sort);
    }

    #[wasm_bindgen(js_name = sortKey)]
    pub fn sort_key(&self) -> Option<String> {
        self.inner.sort().map(|s| s.key().to_string())
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// Visible ratings in display order, as JSON
    #[wasm_bindgen(js_name = visibleJson)]
    pub fn visible_json(&self) -> Result<String, JsValue> {
        to_json(&self.inner.visible()).map_err(js_error)
    }

    #[wasm_bindgen(js_name = facetsJson)]
    pub fn facets_json(&self) -> Result<String, JsValue> {
        to_json(self.inner.facets()).map_err(js_error)
    }

    /// "Showing N of M items"
    pub fn summary(&self) -> String {
        self.inner.summary().to_string()
    }

    #[wasm_bindgen(js_name = shownCount)]
    pub fn shown_count(&self) -> usize {
        self.inner.summary().shown
    }

    #[wasm_bindgen(js_name = totalCount)]
    pub fn total_count(&self) -> usize {
        self.inner.summary().total
    }

    pub fn open(&mut self, id: i32) -> bool {
        self.inner.open(id)
    }

    pub fn close(&mut self) {
        self.inner.close();
    }

    #[wasm_bindgen(js_name = selectedJson)]
    pub fn selected_json(&self) -> Option<String> {
        self.inner.selected().and_then(|r| to_json(r).ok())
    }

    /// Move the detail view; `direction` is "prev" or "next"
    pub fn navigate(&mut self, direction: &str) -> Result<Option<String>, JsValue> {
        self.try_navigate(direction).map_err(js_error)
    }
}

impl CatalogPage {
    fn try_load_ratings(&mut self, json: &str) -> Result<(), String> {
        match serde_json::from_str::<Vec<Rating>>(json) {
            Ok(ratings) => {
                self.inner.finish_load(Ok(ratings));
                Ok(())
            }
            Err(e) => {
                let reason = format!("Invalid ratings JSON: {}", e);
                self.inner.finish_load(Err(reason.clone()));
                Err(reason)
            }
        }
    }

    fn try_set_filters(&mut self, json: &str) -> Result<(), String> {
        let filters: FilterState =
            serde_json::from_str(json).map_err(|e| format!("Invalid filters JSON: {}", e))?;
        self.inner.set_filters(filters);
        Ok(())
    }

    fn try_navigate(&mut self, direction: &str) -> Result<Option<String>, String> {
        let direction = NavigateDirection::from_str(direction)?;
        match self.inner.navigate(direction) {
            Some(rating) => to_json(rating).map(Some),
            None => Ok(None),
        }
    }
}

/// Newsletter popup exposed to JavaScript.
///
/// JavaScript owns the network call: `beginSubmit` returns the request body
/// for `POST /api/newsletter/subscribe` and `finishSubmit` takes the status.
#[wasm_bindgen(js_name = NewsletterPopup)]
#[derive(Default)]
pub struct SignupPopup {
    inner: newsletter::NewsletterPopup,
}

#[wasm_bindgen(js_class = NewsletterPopup)]
impl SignupPopup {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self) {
        self.inner.open();
    }

    pub fn close(&mut self) {
        self.inner.close();
    }

    #[wasm_bindgen(js_name = isOpen)]
    pub fn is_open(&self) -> bool {
        self.inner.is_open()
    }

    #[wasm_bindgen(js_name = setEmail)]
    pub fn set_email(&mut self, email: &str) {
        self.inner.form_mut().set_email(email);
    }

    #[wasm_bindgen(js_name = setName)]
    pub fn set_name(&mut self, first_name: &str, last_name: &str) {
        self.inner.form_mut().set_name(first_name, last_name);
    }

    pub fn email(&self) -> String {
        self.inner.form().email().to_string()
    }

    /// One of "idle", "submitting", "submitted", "error"
    pub fn state(&self) -> String {
        match self.inner.form().state() {
            SubscribeState::Idle => "idle",
            SubscribeState::Submitting => "submitting",
            SubscribeState::Submitted => "submitted",
            SubscribeState::Error(_) => "error",
        }
        .to_string()
    }

    /// Message to show under the form, if any
    #[wasm_bindgen(js_name = errorMessage)]
    pub fn error_message(&self) -> Option<String> {
        let form = self.inner.form();
        match form.state() {
            SubscribeState::Error(message) => Some(message.clone()),
            _ => form.validation_error().map(|e| e.to_string()),
        }
    }

    /// Validate and return the JSON request body to send
    #[wasm_bindgen(js_name = beginSubmit)]
    pub fn begin_submit(&mut self) -> Result<String, JsValue> {
        self.try_begin_submit().map_err(JsValue::from)
    }

    /// Apply the HTTP status of the subscribe call; 0 means the request
    /// never got a response. Returns true only when a pending request
    /// succeeded.
    #[wasm_bindgen(js_name = finishSubmit)]
    pub fn finish_submit(&mut self, status: u16) -> bool {
        let outcome = match status {
            200..=299 => Ok(()),
            0 => Err(GatewayError::Network("no response".to_string())),
            status => Err(GatewayError::Status(status)),
        };
        if let Err(e) = &outcome {
            web_sys::console::warn_1(&JsValue::from_str(&format!("Newsletter signup failed: {}", e)));
        }
        self.inner.form_mut().finish_submit(outcome).is_ok()
    }
}

impl SignupPopup {
    fn try_begin_submit(&mut self) -> Result<String, String> {
        let request = self.inner.form_mut().begin_submit().map_err(|e| e.to_string())?;
        to_json(&request)
    }
}

/// Render a 0-10 score as ten stars
#[wasm_bindgen(js_name = renderStars)]
pub fn render_stars(score: i32) -> String {
    shared::render_stars(score)
}

/// Sort options for the sort dropdown as `[{key, label}]` JSON
#[wasm_bindgen(js_name = sortOptionsJson)]
pub fn sort_options_json() -> String {
    let options: Vec<serde_json::Value> = SortSelection::ALL
        .iter()
        .map(|s| serde_json::json!({ "key": s.key(), "label": s.label() }))
        .collect();
    serde_json::Value::Array(options).to_string()
}

#[wasm_bindgen(js_name = isValidEmail)]
pub fn is_valid_email(email: &str) -> bool {
    shared::is_valid_email(email)
}

/// Price per unit of weight, e.g. "$1.56 / oz". `None` for unparsable
/// input or a zero weight.
#[wasm_bindgen(js_name = pricePerUnit)]
pub fn price_per_unit(price: &str, weight: &str, unit: &str) -> Option<String> {
    let price = Decimal::from_str(price.trim()).ok()?;
    let weight = Decimal::from_str(weight.trim()).ok()?;
    let per_unit = price.checked_div(weight)?.round_dp(2);
    Some(format!("${:.2} / {}", per_unit, unit))
}
