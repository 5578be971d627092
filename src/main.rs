//! Hero Comets entry point
//!
//! Mounts the comets into the hero banner and drives the repulsion field from
//! pointer moves.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_hero {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, MouseEvent};

    use hero_comets::field::schedule;
    use hero_comets::view::{comet_body_style, spotlight_css};
    use hero_comets::{AnchorProvider, FieldSettings, RepulsionField};

    /// Measures comet centers from current layout
    struct DomAnchors<'a> {
        container: &'a Element,
        comets: &'a [Element],
    }

    impl AnchorProvider for DomAnchors<'_> {
        fn anchor(&self, index: usize) -> Option<Vec2> {
            let comet = self.comets.get(index)?;
            if !comet.is_connected() {
                return None;
            }
            let origin = self.container.get_bounding_client_rect();
            let rect = comet.get_bounding_client_rect();
            Some(Vec2::new(
                (rect.left() - origin.left() + rect.width() / 2.0) as f32,
                (rect.top() - origin.top() + rect.height() / 2.0) as f32,
            ))
        }
    }

    /// Hero banner state shared by event handlers
    struct Hero {
        field: RepulsionField,
        container: Element,
        comets: Vec<Element>,
        spotlight: Option<Element>,
    }

    impl Hero {
        /// Pointer in client coordinates
        fn on_pointer_move(&mut self, client_x: f64, client_y: f64) {
            let origin = self.container.get_bounding_client_rect();
            let pointer = Vec2::new(
                (client_x - origin.left()) as f32,
                (client_y - origin.top()) as f32,
            );

            let anchors = DomAnchors {
                container: &self.container,
                comets: &self.comets,
            };
            self.field.pointer_moved(pointer, &anchors);
            self.apply();
        }

        /// Write offsets and spotlight to the DOM
        fn apply(&self) {
            for (comet, offset) in self.comets.iter().zip(self.field.offsets()) {
                let _ = comet.set_attribute("style", &comet_body_style(*offset));
            }
            if let Some(ref spotlight) = self.spotlight {
                let style = format!("background: {};", spotlight_css(self.field.pointer()));
                let _ = spotlight.set_attribute("style", &style);
            }
        }
    }

    /// Create comet elements inside the container, returning their bodies
    fn mount_comets(
        document: &Document,
        container: &Element,
        count: usize,
    ) -> Result<Vec<Element>, JsValue> {
        let mut bodies = Vec::with_capacity(count);

        for track in schedule(count) {
            let wrapper = document.create_element("div")?;
            wrapper.set_attribute("class", "comet")?;
            wrapper.set_attribute("style", &track.wrapper_style())?;

            let body = document.create_element("div")?;
            body.set_attribute("class", "comet-body")?;
            body.set_attribute("data-comet", &track.index.to_string())?;
            body.set_attribute("style", &comet_body_style(Vec2::ZERO))?;

            let head = document.create_element("div")?;
            head.set_attribute("class", "comet-head")?;

            body.append_child(&head)?;
            wrapper.append_child(&body)?;
            container.append_child(&wrapper)?;
            bodies.push(body);
        }

        Ok(bodies)
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Hero comets starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let Some(container) = document.get_element_by_id("hero") else {
            log::warn!("No #hero container, comets not mounted");
            return Ok(());
        };

        let settings = FieldSettings::load();
        let comets = mount_comets(&document, &container, settings.comet_count)?;
        log::info!("Mounted {} comets", comets.len());

        let spotlight = document.get_element_by_id("hero-spotlight");
        if spotlight.is_none() {
            log::warn!("No #hero-spotlight element, cursor glow disabled");
        }

        let hero = Rc::new(RefCell::new(Hero {
            field: RepulsionField::new(settings),
            container,
            comets,
            spotlight,
        }));
        hero.borrow().apply();

        // Pointer move anywhere in the window
        {
            let hero = hero.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                hero.borrow_mut()
                    .on_pointer_move(event.client_x() as f64, event.client_y() as f64);
            });
            window.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        log::info!("Hero comets running!");
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_hero::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use glam::Vec2;
    use hero_comets::{FieldSettings, RepulsionField};

    env_logger::init();
    log::info!("Hero comets (native) starting...");
    log::info!("Native mode only samples the field - run with `trunk serve` for the web version");

    let settings = FieldSettings::load();
    let radius = settings.radius;
    let mut field = RepulsionField::new(settings);

    // Comets spread along the x axis, last one left unmeasured
    let count = field.comet_count();
    let anchors: Vec<Option<Vec2>> = (0..count)
        .map(|i| {
            (i + 1 < count).then(|| Vec2::new(i as f32 * radius / 4.0, 0.0))
        })
        .collect();

    field.pointer_moved(Vec2::ZERO, &anchors);

    for (i, (anchor, offset)) in anchors.iter().zip(field.offsets()).enumerate() {
        log::info!("comet {}: anchor {:?} -> offset {:?}", i, anchor, offset);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
