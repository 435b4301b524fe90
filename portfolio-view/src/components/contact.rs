use leptos::prelude::*;

use super::{ICON_MAIL, Icon, SectionHeading};
use crate::nav::Section;
use crate::types::Personal;

#[component]
pub fn Contact(personal: Personal) -> impl IntoView {
    let primary = format!("mailto:{}", personal.email);
    let secondary = format!("mailto:{}", personal.email2);

    view! {
        <section id=Section::Contact.anchor() class="section section-alt">
            <div class="container contact-content">
                <SectionHeading title="Get In Touch" />
                <p class="contact-lead">"I'm currently seeking opportunities. Let's connect!"</p>

                <div class="contact-links">
                    <a href=primary.clone() class="contact-link">
                        <Icon path=ICON_MAIL />
                        <span>{personal.email}</span>
                    </a>
                    <a href=secondary class="contact-link">
                        <Icon path=ICON_MAIL />
                        <span>{personal.email2}</span>
                    </a>
                </div>

                <a href=primary class="btn btn-primary">"Send Message"</a>
            </div>
        </section>
    }
}
