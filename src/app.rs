use leptos::prelude::*;

use crate::components::about::About;
use crate::components::capstone::Capstone;
use crate::components::contact::Contact;
use crate::components::experience::Experience;
use crate::components::face_detection::FaceDetection;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::portfolio::Portfolio;
use crate::components::services::Services;

/// Single-page layout: all sections stacked in order, anchor navigation.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Header />
        <main>
            <About />
            <Experience />
            <Services />
            <Portfolio />
            <Capstone />
            <FaceDetection />
            <Contact />
        </main>
        <Footer />
    }
}
