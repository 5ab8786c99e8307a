mod home;
mod post_detail;

pub(crate) use home::{HomeView, render_post_list};
pub(crate) use post_detail::PostDetailView;
