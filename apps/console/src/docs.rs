//! Static documentation pages, carried over from the web dashboard.

pub const SETUP_DOCS: &str = "\
Setup Documentation — WhisperAPI Setup Process

1. Install Docker
   The API ships as a Docker image. On Windows, install Docker Desktop and
   enable your distribution under Settings > Resources > WSL Integration.

2. GPU support (optional)
   For CUDA transcription install the NVIDIA Container Toolkit and make sure
   the nvidia-container-runtime is registered in the Docker daemon's
   runtimeArgs. Without a GPU the API falls back to CPU inference with int8
   compute.

3. Run the API container
   Expose the API port and point this dashboard at it:

     whisperui --base-url http://localhost:8000

   The device banner on the Transcribe Files page confirms which device the
   models were loaded onto.

4. Hugging Face token
   The diarisation pipeline downloads gated pyannote models on first use; the
   API container needs a valid Hugging Face token for that.";

pub const API_DOCS: &str = "\
API Documentation — WhisperAPI Endpoint Information

GET /get-device
  Returns the device the models are loaded on, as a JSON string
  (\"cuda\" or \"cpu\").

POST /transcribe-files
  Multipart body: every audio file under the repeated `files` field.
  Accepted formats: mp3, mp4, mpeg, mpga, m4a, wav, webm. Size limit per
  file: 25 MB.

  Query parameters:
    model_size            one of \"base\", \"small\", \"medium\", \"large\"
    transcription_method  one of \"whisper\", \"whisperX\"
    diarisation           boolean
    diarisation_method    one of \"clustering\", \"whisperX_pipeline\"
    num_speakers          integer, 1 to 10
    audit                 boolean
    criteria              string, up to 1000 characters

  Response: JSON object keyed by the 1-based file ordinal. Each entry is
  either a transcription result or a per-file error. Example, with
  diarisation enabled and the second file encountering an error:

  {
    \"1\": {
      \"filename\": \"meeting.wav\",
      \"language\": \"en\",
      \"segments\": [
        {
          \"start\": 0.0,
          \"end\": 2.5,
          \"text\": \" Hello there.\",
          \"speaker\": \"SPEAKER_00\"
        }
      ],
      \"result\": \"The transcript meets the supplied criteria.\"
    },
    \"2\": {
      \"filename\": \"music.mp3\",
      \"error\": \"Diarisation cannot be performed on stereo audio.\"
    }
  }

  Note: whisperX_pipeline diarisation cannot be combined with the plain
  whisper transcription method; the API rejects that configuration.";
