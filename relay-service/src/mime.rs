pub const VIDEO_MIME: &str = "video/mp4";

/// Guess an audio mime type from the uploaded filename.
///
/// Only `.wav` and `.mpeg` are recognised; everything else is sent as mp3.
pub fn audio_mime_from_filename(filename: &str) -> &'static str {
    if filename.ends_with(".wav") {
        "audio/wav"
    } else if filename.ends_with(".mpeg") {
        "audio/mpeg"
    } else {
        "audio/mp3"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wav() {
        assert_eq!(audio_mime_from_filename("question.wav"), "audio/wav");
    }

    #[test]
    fn test_mpeg() {
        assert_eq!(audio_mime_from_filename("recording.mpeg"), "audio/mpeg");
    }

    #[test]
    fn test_mp3_falls_back_to_mp3() {
        assert_eq!(audio_mime_from_filename("song.mp3"), "audio/mp3");
    }

    #[test]
    fn test_no_extension_falls_back_to_mp3() {
        assert_eq!(audio_mime_from_filename("blob"), "audio/mp3");
        assert_eq!(audio_mime_from_filename(""), "audio/mp3");
    }

    #[test]
    fn test_suffix_match_is_case_sensitive() {
        assert_eq!(audio_mime_from_filename("LOUD.WAV"), "audio/mp3");
    }
}
