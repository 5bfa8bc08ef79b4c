use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <a href="#home" class="footer__logo">"MAK"</a>

            <ul class="permalinks">
                <li><a href="#home">"Home"</a></li>
                <li><a href="#about">"About"</a></li>
                <li><a href="#experience">"Experience"</a></li>
                <li><a href="#services">"Certifications"</a></li>
                <li><a href="#capstone">"Capstone"</a></li>
                <li><a href="#contact">"Contact"</a></li>
            </ul>

            <div class="footer__socials">
                <a href="https://twitter.com/MohdAkeebKhan1" target="_blank">"Twitter"</a>
            </div>

            <div class="footer__copyright">
                <small>"(c) Mohd Akeeb Khan. All rights reserved."</small>
            </div>
        </footer>
    }
}
