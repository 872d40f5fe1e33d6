//! Test fixtures and constants.

/// A syntactically valid ed25519 public key nobody holds the private half of.
pub const CAROL_PUBLIC_KEY: &str =
    "ssh-ed25519 AAAAC3NzaC1lZDI1NTE5AAAAIOMqqnkVzrm0SdG6UOoqKLsabgH5C9okWi0dh2l9GKJl carol@example.com";

/// A key line with a single field, rejected by the registry.
pub const INVALID_PUBLIC_KEY: &str = "not-a-key";

/// Plaintext secrets as a user would write them.
pub const SAMPLE_ENV: &str = "DATABASE_URL=postgres://localhost/mydb\nAPI_KEY=sk-test-12345\n";

/// Config with several environments, one target each except dev.
pub const MULTI_ENV_CONFIG: &str = "\
environments:
  dev:
    encrypted_file: dev.age
    targets:
      - path: .env
      - path: services/api/.env
  staging:
    encrypted_file: staging.age
    targets:
      - path: .env.staging
  prod:
    encrypted_file: prod.age
    targets:
      - path: .env.prod
";

/// A second key line, only ever parsed, never used to encrypt.
pub const DAVE_PUBLIC_KEY: &str =
    "ssh-rsa AAAAB3NzaC1yc2EAAAADAQABAAABAQDaveDaveDaveDaveDave dave@example.com";
