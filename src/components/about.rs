use leptos::prelude::*;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about">
            <h5>"Get To Know"</h5>
            <h2>"About Me"</h2>

            <div class="container about__container">
                <div class="about__me">
                    <div class="about__me-image">
                        <img src="assets/me.png" alt="Portrait" />
                    </div>
                </div>

                <div class="about__content">
                    <div class="about__cards">
                        <article class="about__card">
                            <h5>"Experience"</h5>
                            <small>"4+ Years Working"</small>
                        </article>
                        <article class="about__card">
                            <h5>"Techstack"</h5>
                            <small>
                                "React, WordPress, Java, HTML, CSS, JavaScript, Node.js, \
                                 MongoDB, Git, GitHub"
                            </small>
                        </article>
                        <article class="about__card">
                            <h5>"Projects"</h5>
                            <small>"10+ Completed (US based)"</small>
                        </article>
                    </div>
                </div>
            </div>

            <div class="container about__description">
                <p>
                    "Results-oriented professional with 4+ years of experience in software \
                     development and technology recruiting, currently transitioning into Data \
                     Science and Machine Learning through a certification program."
                </p>
                <p>
                    "I work on end-to-end data science problems, including data cleaning, \
                     exploratory data analysis, feature engineering, and building machine \
                     learning models with proper validation and evaluation."
                </p>
                <p>
                    "My experience covers supervised and unsupervised learning techniques such \
                     as regression, classification, tree-based and ensemble models, SVM, \
                     K-Means, and dimensionality reduction using PCA/LDA, with foundational \
                     exposure to deep learning architectures including MLP, CNN, and RNN."
                </p>
                <p>
                    "I primarily use Python (NumPy, Pandas, Scikit-learn), SQL, and \
                     visualization tools to build reproducible analytics workflows. My \
                     background as a React/JavaScript developer helps me bring strong product \
                     thinking and clarity to data-driven solutions."
                </p>
                <a href="#contact" class="btn btn-primary">"Let's talk"</a>
            </div>
        </section>
    }
}
