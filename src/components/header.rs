use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header id="home">
            <div class="container header__container">
                <h5>"Hello, I am"</h5>
                <h1>"Mohd Akeeb Khan"</h1>
                <h5 class="text-light">"Data Science & Machine Learning"</h5>

                <div class="cta">
                    <a href="assets/resume.pdf" download class="btn">"Download CV"</a>
                    <a href="#contact" class="btn btn-primary">"Let's Talk"</a>
                </div>

                <div class="header__socials">
                    <a href="https://linkedin.com/in/md-akeeb-khan-766885176" target="_blank">
                        "LinkedIn"
                    </a>
                    <a href="https://github.com/MoAkeebKhan/" target="_blank">"GitHub"</a>
                    <a href="https://instagram.com/md__akeeb__khan" target="_blank">"Instagram"</a>
                </div>

                <a href="#contact" class="scroll__down">"Scroll Down"</a>
            </div>
        </header>
    }
}
