use std::fmt;
use std::str::FromStr;

/// Entry points reachable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Download,
    DownloadDocSamples,
    DownloadVideoSamples,
    AreDocSamplesDownloaded,
    AreVideoSamplesDownloaded,
}

impl Command {
    pub const ALL: [Command; 5] = [
        Command::Download,
        Command::DownloadDocSamples,
        Command::DownloadVideoSamples,
        Command::AreDocSamplesDownloaded,
        Command::AreVideoSamplesDownloaded,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Command::Download => "download",
            Command::DownloadDocSamples => "download_doc_samples",
            Command::DownloadVideoSamples => "download_video_samples",
            Command::AreDocSamplesDownloaded => "are_doc_samples_downloaded",
            Command::AreVideoSamplesDownloaded => "are_video_samples_downloaded",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCommand(pub String);

impl fmt::Display for UnknownCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Function '{}' not found.", self.0)
    }
}

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Command::ALL
            .into_iter()
            .find(|command| command.name() == value)
            .ok_or_else(|| UnknownCommand(value.to_string()))
    }
}
