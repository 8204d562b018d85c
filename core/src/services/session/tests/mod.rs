mod codec_tests;
mod registry_tests;
