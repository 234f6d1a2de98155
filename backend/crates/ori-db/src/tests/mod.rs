mod in_memory;
