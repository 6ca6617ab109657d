mod limits;
mod remote;

pub use limits::*;
pub use remote::*;

/// Prompt sent with every house photo.
pub const HOUSE_PARTY_PROMPT: &str = "Animer et feriecenter, der bliver bygget oven på dette hus. Tilføj farverige rutsjebaner, der kommer ud af vinduerne, en stor swimmingpool i forhaven og en festlig, glad atmosfære.";

pub const VIDEO_SAMPLE_COUNT: u32 = 1;
pub const VIDEO_RESOLUTION: &str = "720p";
pub const VIDEO_ASPECT_RATIO: &str = "16:9";

pub const GENERATED_VIDEO_MIME: &str = "video/mp4";
pub const GENERATED_VIDEO_FILE_PREFIX: &str = "feriecenter";

pub const ACCEPTED_IMAGE_MIME_PREFIX: &str = "image/";

/// Shown in order while the provider works, wrapping after the last entry.
pub const LOADING_MESSAGES: [&str; 6] = [
    "Lægger fundamentet til feriecentret...",
    "Monterer rutsjebaner i vinduerne...",
    "Graver swimmingpoolen i forhaven...",
    "Hænger flag og lyskæder op...",
    "Inviterer gæsterne til fest...",
    "Lægger sidste hånd på videoen...",
];

/// Provider message that, in practice, means the credential is wrong or revoked.
pub const ENTITY_NOT_FOUND_MARKER: &str = "Requested entity was not found.";

pub mod messages {
    pub const CREDENTIAL_GUIDANCE: &str = "API-nøglen blev ikke accepteret. Kontrollér at nøglen er gyldig og har adgang til videogenerering, og prøv igen.";
    pub const MISSING_CREDENTIAL: &str = "Der er ikke konfigureret nogen API-nøgle på serveren.";
    pub const GENERIC_FAILURE: &str = "Der opstod en ukendt fejl under genereringen af videoen.";
    pub const INVALID_FILE_TYPE: &str = "Vælg venligst en gyldig billedfil.";
    pub const NO_IMAGE_SELECTED: &str = "Upload venligst et billede af et hus først.";
    pub const ALREADY_IN_PROGRESS: &str = "Der er allerede en video under generering.";
    pub const UNKNOWN_RESULT: &str = "Videogenereringen blev fuldført, men der blev ikke fundet noget downloadlink.";
    pub const DOWNLOAD_FAILED: &str = "Kunne ikke downloade videoen";
    pub const PREVIEW_UNAVAILABLE: &str = "Billedet kunne ikke vises";
    pub const IMAGE_TOO_LARGE: &str = "Billedet er for stort. Vælg et billede på højst 20 MB.";
    pub const VIDEO_TOO_LARGE: &str = "Videoen er for stor til at blive hentet (over 100 MB).";
}
