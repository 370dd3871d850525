#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Variety,
    Character,
    Sowing,
    Nursery,
    Harvest,
}

pub enum Msg {
    SetRegion(String),
    SetCropName(String),
    SetField(Field, String),
    /// Validate and ask for confirmation.
    Submit,
    /// Register the confirmed input.
    Confirm,
    /// Leave the confirmation and keep editing.
    BackToEdit,
    /// Empty the form and stay on the screen ("続けて登録").
    Reset,
    /// Show the detail page of the crop just registered.
    OpenRegistered,
    Cancel,
}
