/// Components that draw a rendered view

use yew::prelude::*;
use crate::render::{PLACEHOLDER, RenderedView, Section};

pub const URL_FIELD_ID: &str = "url-display-field";

#[derive(Properties, PartialEq)]
pub struct ChecklistSectionProps {
    pub section: Section,
}

#[function_component(ChecklistSection)]
pub fn checklist_section(props: &ChecklistSectionProps) -> Html {
    let section = &props.section;

    html! {
        <>
            <h2>{&section.heading}</h2>
            <ul>
                {for section.items.iter().map(|item| html! {
                    <li>
                        <input type="checkbox" id={item.checkbox_id.clone()} />
                        <label for={item.checkbox_id.clone()}>{&item.label}</label>
                    </li>
                })}
            </ul>
        </>
    }
}

#[function_component(Placeholder)]
pub fn placeholder() -> Html {
    html! {
        <h3>{PLACEHOLDER}</h3>
    }
}

#[derive(Properties, PartialEq)]
pub struct UrlFieldProps {
    pub url: String,
}

#[function_component(UrlField)]
pub fn url_field(props: &UrlFieldProps) -> Html {
    html! {
        <input type="text" id={URL_FIELD_ID} class="url-field" readonly={true} value={props.url.clone()} />
    }
}

#[derive(Properties, PartialEq)]
pub struct PaneProps {
    pub view: RenderedView,
}

/// The full container contents for a view
#[function_component(Pane)]
pub fn pane(props: &PaneProps) -> Html {
    match &props.view {
        RenderedView::Empty => html! {},
        RenderedView::Placeholder => html! { <Placeholder /> },
        RenderedView::Url(url) => html! { <UrlField url={url.clone()} /> },
        RenderedView::Checklists(sections) => html! {
            <>
                // Keyed by position: a rule may list the same checklist twice.
                {for sections.iter().enumerate().map(|(index, section)| html! {
                    <ChecklistSection key={index} section={section.clone()} />
                })}
            </>
        },
    }
}
