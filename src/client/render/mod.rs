//! Widget-free view model: what each screen shows, computed from state.

pub mod cards;
pub mod pages;

pub use cards::{render_card, render_collection, BookCard, CardAction, CardVariant, CollectionView, EmptyContext, Layout};
pub use pages::{render_groups, render_header, render_nav, render_profile, HeaderView, ProfileView};
