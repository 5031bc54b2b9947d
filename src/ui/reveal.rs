//! Scroll-triggered reveal animations for the landing sections

use leptos::prelude::*;

/// CSS for elements that fade in as they scroll into view
#[component]
pub fn RevealStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            .reveal-on-scroll {
                opacity: 0;
                transform: translateY(30px);
                transition: opacity 0.6s ease, transform 0.6s ease;
            }

            .reveal-on-scroll.visible {
                opacity: 1;
                transform: translateY(0);
            }
            "#
        </style>
    }
}

/// Script driving the reveal animations with an IntersectionObserver.
///
/// Cards stagger in: each observed element gets a transition delay based on
/// its position in document order. Also fades the whole page in shortly after
/// it becomes interactive.
#[component]
pub fn RevealScript() -> impl IntoView {
    view! {
        <script>
            r#"
            (function() {
                function initRevealAnimations() {
                    const observer = new IntersectionObserver((entries) => {
                        entries.forEach(entry => {
                            if (entry.isIntersecting) {
                                entry.target.classList.add('visible');
                            }
                        });
                    }, {
                        threshold: 0.1,
                        rootMargin: '0px 0px -50px 0px'
                    });

                    document.querySelectorAll('.reveal-on-scroll').forEach((el, index) => {
                        el.style.transitionDelay = (index * 0.1) + 's';
                        observer.observe(el);
                    });
                }

                function fadeInPage() {
                    document.body.style.opacity = '0';
                    setTimeout(() => {
                        document.body.style.transition = 'opacity 0.5s ease';
                        document.body.style.opacity = '1';
                    }, 100);
                }

                if (document.readyState === 'loading') {
                    document.addEventListener('DOMContentLoaded', () => {
                        fadeInPage();
                        initRevealAnimations();
                    });
                } else {
                    fadeInPage();
                    initRevealAnimations();
                }
            })();
            "#
        </script>
    }
}
