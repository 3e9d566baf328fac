use yew::prelude::*;

use crate::components::{FormField, LiveOrderTracker};
use crate::context::catalog::use_catalog;
use crate::context::toast::Toast;
use crate::hooks::{use_form, use_toast, ValidationMode};
use crate::models::forms::ProfileForm;
use crate::services::order_service::save_profile;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ProfileTab {
    #[default]
    TrackOrder,
    OrderHistory,
    ProfileSettings,
}

impl ProfileTab {
    pub const ALL: [ProfileTab; 3] = [ProfileTab::TrackOrder, ProfileTab::OrderHistory, ProfileTab::ProfileSettings];

    pub fn value(self) -> &'static str {
        match self {
            ProfileTab::TrackOrder => "track-order",
            ProfileTab::OrderHistory => "order-history",
            ProfileTab::ProfileSettings => "profile-settings",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProfileTab::TrackOrder => "Track Your Order",
            ProfileTab::OrderHistory => "Order History",
            ProfileTab::ProfileSettings => "Profile Settings",
        }
    }
}

#[function_component(OrderStatusProfilePage)]
pub fn order_status_profile_page() -> Html {
    let active_tab = use_state(ProfileTab::default);

    use_effect_with((), |_| {
        log::info!("📦 OrderStatusProfilePage cargada");
        || ()
    });

    let on_tab = |tab: ProfileTab| {
        let active_tab = active_tab.clone();
        Callback::from(move |_: MouseEvent| active_tab.set(tab))
    };

    // Solo la pestaña activa se monta: el tracker se detiene al salir de ella
    let content = match *active_tab {
        ProfileTab::TrackOrder => html! { <LiveOrderTracker /> },
        ProfileTab::OrderHistory => html! { <OrderHistory /> },
        ProfileTab::ProfileSettings => html! { <ProfileSettings /> },
    };

    html! {
        <div class="page order-status-page">
            <div class="container">
                <div class="tabs">
                    <div class="tabs-list" role="tablist">
                        { for ProfileTab::ALL.into_iter().map(|tab| {
                            let selected = *active_tab == tab;
                            html! {
                                <button
                                    key={tab.value()}
                                    type="button"
                                    role="tab"
                                    class={classes!("tabs-trigger", selected.then_some("active"))}
                                    aria-selected={selected.to_string()}
                                    onclick={on_tab(tab)}
                                >
                                    {tab.label()}
                                </button>
                            }
                        })}
                    </div>
                    <div class="tabs-content" role="tabpanel" id={active_tab.value()}>
                        {content}
                    </div>
                </div>
            </div>
        </div>
    }
}

#[function_component(OrderHistory)]
fn order_history() -> Html {
    let catalog = use_catalog();

    html! {
        <div class="card">
            <div class="card-header">
                <h2 class="card-title">{"Past Orders"}</h2>
                <p class="card-description">{"Here is a list of your recent orders."}</p>
            </div>
            <div class="card-content">
                <table class="table">
                    <thead>
                        <tr>
                            <th>{"Order ID"}</th>
                            <th>{"Date"}</th>
                            <th>{"Restaurant"}</th>
                            <th>{"Total"}</th>
                            <th class="text-right">{"Status"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for catalog.past_orders.iter().map(|order| html! {
                            <tr key={order.id.clone()}>
                                <td class="font-medium">{&order.id}</td>
                                <td>{order.date_label()}</td>
                                <td>{&order.restaurant}</td>
                                <td>{order.total_label()}</td>
                                <td class="text-right">
                                    <span class={order.status.badge_class()}>{order.status.to_string()}</span>
                                </td>
                            </tr>
                        })}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[function_component(ProfileSettings)]
fn profile_settings() -> Html {
    let form = use_form(ProfileForm::default(), ValidationMode::OnChange);
    let toast = use_toast();

    let on_valid = Callback::from(move |values: ProfileForm| {
        if save_profile(&values).is_ok() {
            toast.emit(Toast::new("Profile updated").success());
        }
    });

    let values = &*form.values;

    html! {
        <div class="card profile-card">
            <div class="card-header">
                <h2 class="card-title">{"Profile"}</h2>
                <p class="card-description">{"Manage your personal information and saved details."}</p>
            </div>
            <div class="card-content">
                <form class="profile-form" onsubmit={form.on_submit(on_valid)}>
                    <FormField
                        id="name"
                        label="Full Name"
                        placeholder="Your full name"
                        value={values.name.clone()}
                        error={form.error("name")}
                        on_input={form.bind(|f, v| f.name = v)}
                    />
                    <FormField
                        id="email"
                        label="Email Address"
                        input_type="email"
                        placeholder="your.email@example.com"
                        value={values.email.clone()}
                        error={form.error("email")}
                        on_input={form.bind(|f, v| f.email = v)}
                    />
                    <FormField
                        id="phone"
                        label="Phone Number"
                        placeholder="123-456-7890"
                        value={values.phone.clone()}
                        error={form.error("phone")}
                        on_input={form.bind(|f, v| f.phone = v)}
                    />
                    <FormField
                        id="address"
                        label="Default Address"
                        placeholder="123 Main St, Anytown, USA"
                        value={values.address.clone()}
                        error={form.error("address")}
                        on_input={form.bind(|f, v| f.address = v)}
                    />
                    <button type="submit" class="btn btn-block">{"Save Changes"}</button>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracker_tab_is_default() {
        assert_eq!(ProfileTab::default(), ProfileTab::TrackOrder);
        assert_eq!(ProfileTab::ALL.map(|t| t.value()), ["track-order", "order-history", "profile-settings"]);
    }
}
