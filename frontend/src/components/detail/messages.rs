use crate::app::Page;
use common::model::detail::CropDetail;

pub enum Msg {
    /// The crop's entry of the region detail file, if it has one.
    Loaded(Option<CropDetail>),
    Failed,
    Navigate(Page),
}
