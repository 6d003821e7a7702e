use common::form::FieldKey;
use common::model::identity::Identity;
use common::upload::UploadEvent;

pub enum Msg {
    SessionLoaded(Option<Identity>),
    Edit(FieldKey, String),
    Blur(FieldKey),
    FileSelected(web_sys::File),
    Upload(UploadEvent),
    Submit,
}
