use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FormFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: AttrValue,
    pub on_input: Callback<String>,
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub description: Option<AttrValue>,
}

/// Input con label y mensaje de error
#[function_component(FormField)]
pub fn form_field(props: &FormFieldProps) -> Html {
    let on_input = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                on_input.emit(input.value());
            }
        })
    };

    let error_id = format!("{}-error", props.id);

    html! {
        <div class={classes!("field", props.error.is_some().then_some("has-error"))}>
            <label for={props.id.clone()}>{props.label.clone()}</label>
            <input
                id={props.id.clone()}
                class="input"
                type={props.input_type.clone()}
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                aria-invalid={props.error.is_some().to_string()}
                aria-describedby={props.error.as_ref().map(|_| error_id.clone())}
                oninput={on_input}
            />
            if let Some(description) = &props.description {
                <p class="field-description">{description.clone()}</p>
            }
            if let Some(error) = &props.error {
                <p id={error_id} class="field-error">{error}</p>
            }
        </div>
    }
}
