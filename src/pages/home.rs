use chrono::Datelike;
use yew::prelude::*;

use crate::components::{
    blog::BlogPosts, contact_form::ContactForm, counter::Counter, faq::Faq, nav::Nav,
    notification::notify, particles::Particles, practice::PracticeAreas, reveal::Reveal,
};
use crate::content::{
    FIRM_EMAIL, FIRM_NAME, FIRM_PHONE, FREE_CONSULTATION_HREF, FREE_CONSULTATION_NOTICE,
};
use crate::view_state::counter::COUNTERS;

#[function_component(Home)]
pub fn home() -> Html {
    let free_consultation = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        notify(FREE_CONSULTATION_NOTICE);
    });
    let year = chrono::Local::now().year();

    html! {
        <div class="landing-page">
            <Nav />

            <section class="hero">
                <Particles />
                <div class="hero-content">
                    <h1 class="hero-title">{"Justice, Argued With Care"}</h1>
                    <p class="hero-subtitle">
                        {"For over two decades "}{FIRM_NAME}{" has stood beside families, founders and businesses when it mattered most."}
                    </p>
                    <div class="hero-buttons">
                        <a href="#contact" class="btn btn-primary">{"Contact Us"}</a>
                        <a href={FREE_CONSULTATION_HREF} class="btn btn-outline" onclick={free_consultation}>
                            {"Free Consultation"}
                        </a>
                    </div>
                </div>
            </section>

            <section id="about" class="about">
                <Reveal class="section-header">
                    <h2>{"About the Firm"}</h2>
                    <p>{"A partnership of trial lawyers and advisors who answer the phone, explain the options and see every matter through."}</p>
                </Reveal>
                <div class="stats">
                    { for COUNTERS.iter().map(|stat| html! { <Counter stat={*stat} /> }) }
                </div>
            </section>

            <section id="practice" class="practice">
                <Reveal class="section-header">
                    <h2>{"Practice Areas"}</h2>
                    <p>{"Focused expertise across the matters our clients face most often."}</p>
                </Reveal>
                <PracticeAreas />
            </section>

            <section id="blog" class="blog">
                <Reveal class="section-header">
                    <h2>{"Legal Insights"}</h2>
                    <p>{"Plain-language notes from our partners."}</p>
                </Reveal>
                <BlogPosts />
            </section>

            <section id="faq" class="faq">
                <Reveal class="section-header">
                    <h2>{"Frequently Asked Questions"}</h2>
                </Reveal>
                <Faq />
            </section>

            <section id="contact" class="contact">
                <Reveal class="section-header">
                    <h2>{"Request a Consultation"}</h2>
                    <p>{"Tell us about your matter and a member of our team will be in touch."}</p>
                </Reveal>
                <div class="contact-grid">
                    <div class="contact-info">
                        <p><i class="fas fa-envelope"></i>{" "}<a href={format!("mailto:{}", FIRM_EMAIL)}>{FIRM_EMAIL}</a></p>
                        <p><i class="fas fa-phone"></i>{" "}{FIRM_PHONE}</p>
                    </div>
                    <ContactForm />
                </div>
            </section>

            <footer class="footer">
                <p>{format!("© {} {}. All rights reserved.", year, FIRM_NAME)}</p>
            </footer>

            <style>
                {r#"
                html {
                    scroll-behavior: smooth;
                }

                header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 100;
                    padding: 1.5rem 0;
                    transition: all 0.3s ease;
                }

                header.scrolled {
                    padding: 0.75rem 0;
                    background: rgba(15, 23, 42, 0.95);
                    box-shadow: 0 4px 20px rgba(0, 0, 0, 0.25);
                }

                .navbar {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 2rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }

                .nav-links {
                    display: flex;
                    gap: 2rem;
                    list-style: none;
                }

                .nav-links a.active {
                    color: #c9a227;
                }

                .hamburger {
                    display: none;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.5rem;
                }

                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                    text-align: center;
                }

                .particles {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                }

                .particle {
                    position: absolute;
                    border-radius: 50%;
                    background: rgba(201, 162, 39, 0.25);
                    animation-name: float-up;
                    animation-timing-function: linear;
                    animation-iteration-count: infinite;
                }

                @keyframes float-up {
                    to { transform: translateY(-200vh); opacity: 0; }
                }

                @keyframes rise-in {
                    from { transform: translateY(50px); opacity: 0; }
                    to { transform: translateY(0); opacity: 1; }
                }

                .hero-title,
                .hero-subtitle,
                .hero-buttons {
                    animation: rise-in 1s cubic-bezier(0.215, 0.61, 0.355, 1) both;
                }

                .hero-subtitle {
                    animation-delay: 0.3s;
                }

                .hero-buttons {
                    animation-delay: 0.6s;
                }

                .reveal {
                    opacity: 0;
                    transform: translateY(30px);
                    transition: opacity 0.8s ease-in-out, transform 0.8s ease-in-out;
                }

                .reveal.visible {
                    opacity: 1;
                    transform: none;
                }

                .practice-details,
                .blog-expanded,
                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.4s ease;
                }

                .practice-details.active,
                .blog-expanded.active,
                .faq-item.active .faq-answer {
                    max-height: 600px;
                }

                @media (max-width: 768px) {
                    .hamburger {
                        display: block;
                    }

                    .nav-links {
                        position: fixed;
                        top: 70px;
                        left: -100%;
                        width: 100%;
                        flex-direction: column;
                        background: rgba(15, 23, 42, 0.98);
                        padding: 2rem;
                        transition: left 0.3s ease;
                    }

                    .nav-links.active {
                        left: 0;
                    }
                }
                "#}
            </style>
        </div>
    }
}
