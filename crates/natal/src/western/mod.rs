pub mod sun_sign;
pub mod zodiac;

pub use sun_sign::{sun_sign, sun_sign_for_date};
pub use zodiac::{resolve, ZodiacPlacement, ZodiacPosition, ZodiacSign};
