#![cfg(target_arch = "wasm32")]
//! `pm-web` — the roster as seen from JavaScript.
//!
//! Build with `wasm-pack build crates/pm-web --target web --profile web`.
//! The page owns one `PeopleMap`, calls `updatePositions()` from its
//! animation timer, and redraws from `getPeopleData()`:
//!
//! ```js
//! const people = new PeopleMap();
//! setInterval(() => {
//!     people.updatePositions();
//!     const data = people.getPeopleData();     // [lat0, lon0, lat1, lon1, ...]
//!     const hasUser = people.userExists();      // data[0..2] is the user if true
//!     draw(data, hasUser);
//! }, 50);
//! ```

use js_sys::Float64Array;
use pm_core::{PmError, WalkConfig};
use pm_roster::Roster;
use wasm_bindgen::prelude::*;

/// A roster owned by the page.  Call `free()` when the map is torn down.
#[wasm_bindgen]
pub struct PeopleMap {
    roster: Roster,
}

#[wasm_bindgen]
impl PeopleMap {
    /// Empty roster with an unseeded walk.
    #[wasm_bindgen(constructor)]
    pub fn new() -> PeopleMap {
        PeopleMap { roster: Roster::new() }
    }

    /// Empty roster whose walk replays identically for the same seed.
    #[wasm_bindgen(js_name = withSeed)]
    pub fn with_seed(seed: u64) -> PeopleMap {
        PeopleMap { roster: Roster::with_seed(seed) }
    }

    /// Empty roster with custom step size (`1 / stepsPerDeg` degrees);
    /// `seed` may be `undefined`.
    #[wasm_bindgen(js_name = withWalk)]
    pub fn with_walk(
        steps_per_deg: u32,
        half_steps: i32,
        seed: Option<u64>,
    ) -> Result<PeopleMap, JsError> {
        let config = WalkConfig { steps_per_deg, half_steps, seed };
        let roster = Roster::with_config(&config).map_err(to_js_error)?;
        Ok(PeopleMap { roster })
    }

    #[wasm_bindgen(js_name = setUserLocation)]
    pub fn set_user_location(&mut self, lat: f64, lon: f64) {
        self.roster.set_user_location(lat, lon);
    }

    #[wasm_bindgen(js_name = addOtherPerson)]
    pub fn add_other_person(&mut self, lat: f64, lon: f64) {
        self.roster.add_other_person(lat, lon);
    }

    #[wasm_bindgen(js_name = userExists)]
    pub fn user_exists(&self) -> bool {
        self.roster.user_exists()
    }

    #[wasm_bindgen(js_name = getPeopleCount)]
    pub fn people_count(&self) -> usize {
        self.roster.people_count()
    }

    #[wasm_bindgen(js_name = updatePositions)]
    pub fn update_positions(&mut self) {
        self.roster.update_positions();
    }

    /// Zero-copy view of `2 * getPeopleCount()` interleaved `lat, lon`
    /// values, user first if present.
    ///
    /// The view aliases wasm linear memory.  It is only valid until the next
    /// call into this module: `addOtherPerson` may reallocate the buffer and
    /// any allocation may grow (and detach) the memory.  Read it, then drop
    /// it; use `copyPeopleData()` to keep a snapshot.
    #[wasm_bindgen(js_name = getPeopleData)]
    pub fn people_data(&self) -> Float64Array {
        // SAFETY: the returned view borrows `self.roster`'s storage; the
        // contract above forbids JS from using it after any further call
        // into the module, which is the only way the storage can move.
        unsafe { Float64Array::view(self.roster.coords()) }
    }

    /// Owned copy of the same data as `getPeopleData()`.
    #[wasm_bindgen(js_name = copyPeopleData)]
    pub fn copy_people_data(&self) -> Float64Array {
        Float64Array::from(self.roster.coords())
    }
}

impl Default for PeopleMap {
    fn default() -> Self {
        Self::new()
    }
}

fn to_js_error(err: PmError) -> JsError {
    JsError::new(&err.to_string())
}
